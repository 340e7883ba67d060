//! See [`process_modify_components`].

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use sol_arc_interface::{
    accounts::store,
    error::ArcError,
    instructions::{
        core_ds::ModifyComponentsArgs,
        InstructionArgs,
    },
};

use crate::{
    context::entity_context::EntityContext,
    debug,
};

/// Replaces the data of existing components. A component's `max_size` never changes here, so the
/// entity is never resized.
pub fn process_modify_components(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let ModifyComponentsArgs { components } = ModifyComponentsArgs::unpack(instruction_data)?;
    let mut ctx = EntityContext::load_modify_components(accounts)?;

    debug!("ModifyComponents: {}", components.len());

    for (key, data) in components {
        let component = ctx
            .entity
            .components
            .get_mut(&key)
            .ok_or(ArcError::ComponentNotFound)?;
        if data.len() as u64 > component.max_size {
            return Err(ArcError::InvalidDataLength.into());
        }
        component.data = data;
    }

    store(ctx.entity_account, &ctx.entity)
}
