//! See [`process_remove_entity`].

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use sol_arc_interface::{
    accounts::close_to,
    error::ArcError,
    instructions::{
        core_ds::RemoveEntityArgs,
        InstructionArgs,
    },
};

use crate::{
    context::entity_context::EntityContext,
    debug,
};

/// Closes an entity that has no components, sending its lamports to the benefactor.
pub fn process_remove_entity(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let RemoveEntityArgs = RemoveEntityArgs::unpack(instruction_data)?;
    let (benefactor, ctx) = EntityContext::load_remove_entity(accounts)?;

    debug!("RemoveEntity: {}", ctx.entity.entity_id);

    if !ctx.entity.components.is_empty() {
        return Err(ArcError::EntityNotEmpty.into());
    }

    close_to(ctx.entity_account, benefactor)
}
