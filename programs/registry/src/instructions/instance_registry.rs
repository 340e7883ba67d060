//! See [`process_instance_registry`].

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
        core_ds::{
            accounts::InitRegistry,
            InitRegistryArgs,
        },
        registry::InstanceRegistryArgs,
        InstructionArgs,
    },
    seeds::INSTANCE_AUTHORITY_SEED,
    state::registry::InstanceAuthority,
};
use solana_instruction_view::cpi::Signer;

use crate::{
    context::instance_registry_context::InstanceRegistryContext,
    debug,
};

/// Creates a new instance of this registry in the core data store and makes the payer the
/// instance authority, the only account allowed to register action bundles on it.
///
/// Anyone may instance the registry.
pub fn process_instance_registry(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let InstanceRegistryArgs { instance } = InstanceRegistryArgs::unpack(instruction_data)?;
    let ctx = InstanceRegistryContext::load(accounts)?;

    debug!("InstanceRegistry: {}", instance);

    let registry_signer_seeds = ctx.registry_signer.seeds();
    InitRegistry {
        payer: ctx.payer,
        system_program: ctx.system_program,
        registry_instance: ctx.registry_instance,
        registry_signer: ctx.registry_signer.account,
    }
    .invoke_signed(
        &[Signer::from(&registry_signer_seeds[..])],
        &InitRegistryArgs {
            registry: crate::ID,
            instance,
        },
    )?;

    let seeds: &[&[u8]] = &[
        INSTANCE_AUTHORITY_SEED,
        ctx.registry_instance.address().as_ref(),
    ];
    let bump = [check_pda(ctx.instance_authority, seeds, &crate::ID)?];

    init_pda_account(
        ctx.payer,
        ctx.instance_authority,
        &crate::ID,
        &signer_seeds(seeds, &bump),
        &InstanceAuthority {
            instance,
            authority: *ctx.payer.address(),
        },
    )
}
