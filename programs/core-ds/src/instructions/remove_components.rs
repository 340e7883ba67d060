//! See [`process_remove_components`].

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use sol_arc_interface::{
    error::ArcError,
    instructions::{
        core_ds::RemoveComponentsArgs,
        InstructionArgs,
    },
};

use crate::{
    context::entity_context::EntityContext,
    debug,
    shared::resize_and_store_entity,
};

/// Removes components from an entity and shrinks it, refunding the freed rent to the benefactor.
pub fn process_remove_components(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let RemoveComponentsArgs { components } = RemoveComponentsArgs::unpack(instruction_data)?;
    let (benefactor, mut ctx) = EntityContext::load_remove_components(accounts)?;

    debug!("RemoveComponents: {}", components.len());

    for key in components.iter() {
        ctx.entity
            .components
            .remove(key)
            .ok_or(ArcError::ComponentNotFound)?;
    }

    resize_and_store_entity(benefactor, ctx.entity_account, &ctx.entity)
}
