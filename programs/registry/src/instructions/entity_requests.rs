//! Entity requests made by action bundles and forwarded to the core data store.
//!
//! Each handler checks the action bundle's permissions in its context, then CPIs into the core
//! data store signed by the registry config PDA.

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use sol_arc_interface::instructions::{
    core_ds::{
        self,
        accounts::{
            AddComponents,
            InitEntity,
            MintArcNft,
            ModifyComponents,
            RemoveComponents,
            RemoveEntity,
        },
    },
    registry::{
        InitEntityArgs,
        MintArcNftArgs,
        ReqAddComponentsArgs,
        ReqModifyComponentsArgs,
        ReqRemoveComponentsArgs,
        ReqRemoveEntityArgs,
    },
    InstructionArgs,
};
use solana_instruction_view::cpi::Signer;

use crate::{
    context::action_bundle_context::{
        EntityRequestContext,
        InitEntityContext,
        MintArcNftContext,
    },
    debug,
};

/// Creates an entity with initial components the action bundle is permitted to write.
pub fn process_init_entity(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let InitEntityArgs {
        entity_id,
        components,
    } = InitEntityArgs::unpack(instruction_data)?;
    let ctx = InitEntityContext::load(accounts)?;

    debug!("InitEntity: {}", entity_id);

    ctx.action_bundle.check_components(components.keys())?;

    let seeds = ctx.registry_signer.seeds();
    InitEntity {
        payer: ctx.payer,
        system_program: ctx.system_program,
        registry_instance: ctx.registry_instance,
        entity: ctx.entity,
        registry_signer: ctx.registry_signer.account,
    }
    .invoke_signed(
        &[Signer::from(&seeds[..])],
        &core_ds::InitEntityArgs {
            entity_id,
            components,
        },
    )
}

/// Binds an SPL mint to an entity. Only action bundles registered with `can_mint` may do this.
pub fn process_mint_arcnft(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let MintArcNftArgs = MintArcNftArgs::unpack(instruction_data)?;
    let ctx = MintArcNftContext::load(accounts)?;

    debug!("MintArcNft");

    let seeds = ctx.registry_signer.seeds();
    MintArcNft {
        payer: ctx.payer,
        system_program: ctx.system_program,
        registry_instance: ctx.registry_instance,
        entity: ctx.entity,
        mint: ctx.mint,
        arcnft: ctx.arcnft,
        registry_signer: ctx.registry_signer.account,
    }
    .invoke_signed(&[Signer::from(&seeds[..])], &core_ds::MintArcNftArgs)
}

pub fn process_req_add_components(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let ReqAddComponentsArgs { components } = ReqAddComponentsArgs::unpack(instruction_data)?;
    let (funding, ctx) = EntityRequestContext::load_add_components(accounts)?;

    debug!("ReqAddComponents: {}", components.len());

    ctx.action_bundle
        .check_components(components.iter().map(|(key, _)| key))?;

    let seeds = ctx.registry_signer.seeds();
    AddComponents {
        payer: funding.funder,
        system_program: funding.system_program,
        entity: ctx.entity_account,
        registry_signer: ctx.registry_signer.account,
    }
    .invoke_signed(
        &[Signer::from(&seeds[..])],
        &core_ds::AddComponentsArgs { components },
    )
}

pub fn process_req_remove_components(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let ReqRemoveComponentsArgs { components } =
        ReqRemoveComponentsArgs::unpack(instruction_data)?;
    let (funding, ctx) = EntityRequestContext::load_remove_components(accounts)?;

    debug!("ReqRemoveComponents: {}", components.len());

    ctx.action_bundle.check_components(components.iter())?;

    let seeds = ctx.registry_signer.seeds();
    RemoveComponents {
        benefactor: funding.funder,
        system_program: funding.system_program,
        entity: ctx.entity_account,
        registry_signer: ctx.registry_signer.account,
    }
    .invoke_signed(
        &[Signer::from(&seeds[..])],
        &core_ds::RemoveComponentsArgs { components },
    )
}

pub fn process_req_modify_components(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let ReqModifyComponentsArgs { components } =
        ReqModifyComponentsArgs::unpack(instruction_data)?;
    let ctx = EntityRequestContext::load_modify_components(accounts)?;

    debug!("ReqModifyComponents: {}", components.len());

    ctx.action_bundle
        .check_components(components.iter().map(|(key, _)| key))?;

    let seeds = ctx.registry_signer.seeds();
    ModifyComponents {
        entity: ctx.entity_account,
        registry_signer: ctx.registry_signer.account,
    }
    .invoke_signed(
        &[Signer::from(&seeds[..])],
        &core_ds::ModifyComponentsArgs { components },
    )
}

/// Closes an empty entity. Any action bundle registered for the entity's instance may do this.
pub fn process_req_remove_entity(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let ReqRemoveEntityArgs = ReqRemoveEntityArgs::unpack(instruction_data)?;
    let (funding, ctx) = EntityRequestContext::load_remove_entity(accounts)?;

    debug!("ReqRemoveEntity: {}", ctx.entity.entity_id);

    let seeds = ctx.registry_signer.seeds();
    RemoveEntity {
        benefactor: funding.funder,
        system_program: funding.system_program,
        entity: ctx.entity_account,
        registry_signer: ctx.registry_signer.account,
    }
    .invoke_signed(&[Signer::from(&seeds[..])], &core_ds::RemoveEntityArgs)
}
