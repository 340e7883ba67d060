//! See [`process_add_components`].

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use sol_arc_interface::instructions::{
    core_ds::AddComponentsArgs,
    InstructionArgs,
};

use crate::{
    context::entity_context::EntityContext,
    debug,
    shared::resize_and_store_entity,
    validation::validate_components,
};

/// Inserts components into an entity, replacing any with the same key, and grows the entity to
/// fit them at their max sizes.
pub fn process_add_components(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let AddComponentsArgs { components } = AddComponentsArgs::unpack(instruction_data)?;
    let (payer, mut ctx) = EntityContext::load_add_components(accounts)?;

    debug!("AddComponents: {}", components.len());

    validate_components(components.iter().map(|(_, component)| component))?;
    ctx.entity.components.extend(components);

    resize_and_store_entity(payer, ctx.entity_account, &ctx.entity)
}
