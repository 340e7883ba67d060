//! See [`process_init_entity`].

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use sol_arc_interface::{
    accounts::{
        check_pda,
        init_pda_account,
        signer_seeds,
        store,
    },
    error::ArcError,
    instructions::{
        core_ds::InitEntityArgs,
        InstructionArgs,
    },
    seeds::ENTITY_SEED,
    state::core_ds::Entity,
};

use crate::{
    context::init_entity_context::InitEntityContext,
    debug,
    validation::validate_components,
};

/// Creates an entity in a registry instance with its initial components and bumps the instance's
/// entity count. The entity inherits its registry and instance from the registry instance.
pub fn process_init_entity(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let InitEntityArgs {
        entity_id,
        components,
    } = InitEntityArgs::unpack(instruction_data)?;
    let mut ctx = InitEntityContext::load(accounts)?;

    debug!("InitEntity: {}", entity_id);

    validate_components(components.values())?;

    let entity_id_bytes = entity_id.to_be_bytes();
    let registry_instance_address = ctx.registry_instance_account.address();
    let seeds: &[&[u8]] = &[
        ENTITY_SEED,
        &entity_id_bytes,
        registry_instance_address.as_ref(),
    ];
    let bump = [check_pda(ctx.entity, seeds, &crate::ID)?];

    let entity = Entity {
        entity_id,
        instance: ctx.registry_instance.instance,
        registry: ctx.registry_instance.registry,
        components,
    };
    init_pda_account(
        ctx.payer,
        ctx.entity,
        &crate::ID,
        &signer_seeds(seeds, &bump),
        &entity,
    )?;

    ctx.registry_instance.entities = ctx
        .registry_instance
        .entities
        .checked_add(1)
        .ok_or(ArcError::ArithmeticOverflow)?;
    store(ctx.registry_instance_account, &ctx.registry_instance)
}
