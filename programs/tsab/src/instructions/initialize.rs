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
        tsab::InitializeArgs,
        InstructionArgs,
    },
    seeds::TSAB_SIGNER_SEED,
    state::tsab::TsabConfig,
};

use crate::{
    context::initialize_context::InitializeContext,
    debug,
};

/// Creates the tsab config PDA `["tsab_signer"]` with the payer as its authority and the
/// component schemas the tsab writes, keyed by the sha256 of their names.
pub fn process_initialize(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let InitializeArgs { components } = InitializeArgs::unpack(instruction_data)?;
    let ctx = InitializeContext::load(accounts)?;

    debug!("Initialize: {}", components.len());

    let seeds: &[&[u8]] = &[TSAB_SIGNER_SEED];
    let bump = [check_pda(ctx.tsab_config, seeds, &crate::ID)?];

    init_pda_account(
        ctx.payer,
        ctx.tsab_config,
        &crate::ID,
        &signer_seeds(seeds, &bump),
        &TsabConfig {
            authority: *ctx.payer.address(),
            components,
        },
    )
}
