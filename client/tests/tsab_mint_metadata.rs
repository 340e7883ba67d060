use client::mollusk_helpers::{
    fetch,
    new_arc_mollusk_context_with_tsab,
    process,
    MOLLUSK_DEFAULT_MINT,
    MOLLUSK_DEFAULT_PAYER,
};
use mollusk_svm::result::ProgramResult;
use sol_arc_interface::{
    error::ArcError,
    state::{
        core_ds::{
            ArcNft,
            Entity,
        },
        tsab::ComponentMetadata,
    },
};
use solana_account::Account;
use solana_address::Address;
use solana_program_error::ProgramError;
use solana_sdk::{
    program_pack::Pack,
    rent::Rent,
};
use spl_token_interface::state::Mint;

fn metadata(mint: Address) -> ComponentMetadata {
    ComponentMetadata {
        update_authority: MOLLUSK_DEFAULT_PAYER,
        mint,
        name: "Arc #1".into(),
        symbol: "ARC".into(),
        uri: "https://example.com/arc/1.json".into(),
        is_mutable: true,
    }
}

#[test]
fn mint_metadata_creates_an_entity_bound_to_the_mint() -> anyhow::Result<()> {
    let (ctx, arc) = new_arc_mollusk_context_with_tsab(vec![])?;

    let (entity, arcnft, mint_metadata) = arc.tsab.mint_metadata(
        MOLLUSK_DEFAULT_PAYER,
        &arc.instance,
        1,
        metadata(MOLLUSK_DEFAULT_MINT),
    )?;
    process(&ctx, &[mint_metadata])?;

    let entity_state: Entity = fetch(&ctx, &entity)?;
    let component = &entity_state.components[&arc.metadata_component];
    assert_eq!(component.max_size, ComponentMetadata::MAX_LEN as u64);
    assert_eq!(
        borsh::from_slice::<ComponentMetadata>(&component.data)?,
        metadata(MOLLUSK_DEFAULT_MINT)
    );

    assert_eq!(
        fetch::<ArcNft>(&ctx, &arcnft)?,
        ArcNft {
            entity,
            mint: MOLLUSK_DEFAULT_MINT,
        }
    );

    Ok(())
}

#[test]
fn mint_metadata_rejects_bad_input() -> anyhow::Result<()> {
    let (ctx, arc) = new_arc_mollusk_context_with_tsab(vec![])?;

    let too_long = ComponentMetadata {
        symbol: "TOOLONGSYMBOL".into(),
        ..metadata(MOLLUSK_DEFAULT_MINT)
    };
    let (_, _, ix) = arc
        .tsab
        .mint_metadata(MOLLUSK_DEFAULT_PAYER, &arc.instance, 1, too_long)?;
    assert_eq!(
        ctx.process_instruction(&ix).program_result,
        ProgramResult::Failure(ProgramError::from(ArcError::InvalidDataLength))
    );

    // The mint account doesn't exist, so it isn't owned by a token program.
    let (_, _, ix) = arc.tsab.mint_metadata(
        MOLLUSK_DEFAULT_PAYER,
        &arc.instance,
        2,
        metadata(Address::new_unique()),
    )?;
    assert_eq!(
        ctx.process_instruction(&ix).program_result,
        ProgramResult::Failure(ProgramError::from(ArcError::InvalidMintAccount))
    );

    Ok(())
}

#[test]
fn mint_metadata_requires_an_initialized_mint() -> anyhow::Result<()> {
    // Owned by the token program and sized like a mint, but never initialized.
    let uninitialized = Address::new_unique();
    let (ctx, arc) = new_arc_mollusk_context_with_tsab(vec![(
        uninitialized,
        Account {
            lamports: Rent::default().minimum_balance(Mint::LEN),
            data: vec![0; Mint::LEN],
            owner: spl_token_interface::ID,
            executable: false,
            rent_epoch: 0,
        },
    )])?;

    let (_, _, ix) = arc.tsab.mint_metadata(
        MOLLUSK_DEFAULT_PAYER,
        &arc.instance,
        1,
        metadata(uninitialized),
    )?;
    assert_eq!(
        ctx.process_instruction(&ix).program_result,
        ProgramResult::Failure(ProgramError::from(ArcError::InvalidMintAccount))
    );

    // The initialized default mint passes the same check.
    let mint = ctx.account_store.borrow()[&MOLLUSK_DEFAULT_MINT].clone();
    assert_eq!(mint.data[sol_arc_interface::utils::MINT_IS_INITIALIZED_OFFSET], 1);
    assert!(Mint::unpack(&mint.data)?.is_initialized);

    Ok(())
}
