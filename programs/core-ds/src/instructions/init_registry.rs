//! See [`process_init_registry`].

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use sol_arc_interface::{
    accounts::{
        check_pda,
        init_pda_account,
        signer_seeds,
    },
    instructions::{
        core_ds::InitRegistryArgs,
        InstructionArgs,
    },
    seeds::REGISTRY_INSTANCE_SEED,
    state::core_ds::RegistryInstance,
};

use crate::{
    context::init_registry_context::InitRegistryContext,
    debug,
};

/// Creates the registry instance PDA `["registry_instance", registry, instance]` for the registry
/// whose signer PDA signed.
pub fn process_init_registry(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let InitRegistryArgs { registry, instance } = InitRegistryArgs::unpack(instruction_data)?;
    let ctx = InitRegistryContext::load(accounts, &registry)?;

    debug!("InitRegistry: {}", instance);

    let instance_bytes = instance.to_be_bytes();
    let seeds: &[&[u8]] = &[REGISTRY_INSTANCE_SEED, registry.as_ref(), &instance_bytes];
    let bump = [check_pda(ctx.registry_instance, seeds, &crate::ID)?];

    init_pda_account(
        ctx.payer,
        ctx.registry_instance,
        &crate::ID,
        &signer_seeds(seeds, &bump),
        &RegistryInstance {
            registry,
            instance,
            entities: 0,
        },
    )
}
