//! See [`process_mint_metadata`].

use std::collections::BTreeMap;

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use sol_arc_interface::{
    error::ArcError,
    instructions::{
        registry::{
            accounts::{
                InitEntity,
                MintArcNft,
            },
            InitEntityArgs,
            MintArcNftArgs,
        },
        tsab::MintMetadataArgs,
        InstructionArgs,
    },
    state::{
        core_ds::SerializedComponent,
        tsab::ComponentMetadata,
    },
};
use solana_instruction_view::cpi::Signer;

use crate::{
    context::mint_metadata_context::MintMetadataContext,
    debug,
};

/// Creates an entity whose only component is `metadata`, then binds `mint` to it as an ARC-NFT.
/// Both steps are requests to the registry signed by the tsab config PDA.
pub fn process_mint_metadata(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let MintMetadataArgs {
        entity_id,
        metadata,
    } = MintMetadataArgs::unpack(instruction_data)?;
    let ctx = MintMetadataContext::load(accounts)?;

    debug!("MintMetadata: {}", entity_id);

    metadata.validate()?;
    if &metadata.mint != ctx.mint.address() {
        return Err(ArcError::InvalidMintAccount.into());
    }

    let metadata_component = *ctx.tsab_config.metadata_component()?;
    let data = borsh::to_vec(&metadata).map_err(|_| ArcError::InvalidInstructionData)?;
    let components = BTreeMap::from([(
        metadata_component,
        SerializedComponent::new(ComponentMetadata::MAX_LEN as u64, data),
    )]);

    let seeds = ctx.tsab_signer_seeds();
    let signers = [Signer::from(&seeds[..])];

    InitEntity {
        payer: ctx.payer,
        system_program: ctx.system_program,
        registry_config: ctx.registry_config,
        entity: ctx.entity,
        registry_instance: ctx.registry_instance,
        action_bundle: ctx.tsab_config_account,
        action_bundle_registration: ctx.tsab_registration,
        core_ds_program: ctx.core_ds_program,
    }
    .invoke_signed(
        &signers,
        &InitEntityArgs {
            entity_id,
            components,
        },
    )?;

    MintArcNft {
        payer: ctx.payer,
        system_program: ctx.system_program,
        registry_config: ctx.registry_config,
        entity: ctx.entity,
        mint: ctx.mint,
        arcnft: ctx.arcnft,
        registry_instance: ctx.registry_instance,
        action_bundle: ctx.tsab_config_account,
        action_bundle_registration: ctx.tsab_registration,
        core_ds_program: ctx.core_ds_program,
    }
    .invoke_signed(&signers, &MintArcNftArgs)
}
