//! See [`process_initialize`].

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
        registry::InitializeArgs,
        InstructionArgs,
    },
    seeds::REGISTRY_SIGNER_SEED,
    state::registry::RegistryConfig,
};

use crate::{
    context::initialize_context::InitializeContext,
    debug,
};

/// Creates the registry config PDA `["registry_signer"]`, bound to the core data store at
/// `core_ds`. Fails if the registry was already initialized.
pub fn process_initialize(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let InitializeArgs { core_ds } = InitializeArgs::unpack(instruction_data)?;
    let ctx = InitializeContext::load(accounts)?;

    debug!("Initialize");

    let seeds: &[&[u8]] = &[REGISTRY_SIGNER_SEED];
    let bump = [check_pda(ctx.registry_config, seeds, &crate::ID)?];

    init_pda_account(
        ctx.payer,
        ctx.registry_config,
        &crate::ID,
        &signer_seeds(seeds, &bump),
        &RegistryConfig {
            core_ds,
            components: 0,
        },
    )
}
