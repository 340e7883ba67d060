//! See [`process_mint_arcnft`].

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
        core_ds::MintArcNftArgs,
        InstructionArgs,
    },
    seeds::ARCNFT_SEED,
    state::core_ds::ArcNft,
};

use crate::{
    context::mint_arcnft_context::MintArcNftContext,
    debug,
};

/// Creates the ARC-NFT PDA `["arcnft", mint, entity]` binding an existing SPL mint to an entity.
pub fn process_mint_arcnft(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let MintArcNftArgs = MintArcNftArgs::unpack(instruction_data)?;
    let ctx = MintArcNftContext::load(accounts)?;

    debug!("MintArcNft");

    let mint = ctx.mint.address();
    let entity = ctx.entity.address();
    let seeds: &[&[u8]] = &[ARCNFT_SEED, mint.as_ref(), entity.as_ref()];
    let bump = [check_pda(ctx.arcnft, seeds, &crate::ID)?];

    init_pda_account(
        ctx.payer,
        ctx.arcnft,
        &crate::ID,
        &signer_seeds(seeds, &bump),
        &ArcNft {
            entity: *entity,
            mint: *mint,
        },
    )
}
