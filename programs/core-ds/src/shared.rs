//! Entity storage helpers shared by the component instructions.

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use sol_arc_interface::{
    accounts::{
        fund_then_resize,
        resize_then_refund,
        store,
    },
    state::{
        core_ds::Entity,
        ProgramAccount,
    },
};

/// Resizes the entity account to fit `entity`'s components at their max sizes, then writes it.
///
/// Growth is funded by `funder` and freed rent is refunded to `funder`.
///
/// ### Accounts
///   0. `[WRITE]` Funder
///   1. `[WRITE]` Entity account
pub fn resize_and_store_entity(
    funder: &AccountView,
    entity_account: &AccountView,
    entity: &Entity,
) -> ProgramResult {
    let new_len = entity.account_len();
    let current_len = entity_account.data_len();

    if new_len > current_len {
        fund_then_resize(funder, entity_account, new_len)?;
    } else if new_len < current_len {
        resize_then_refund(entity_account, funder, new_len)?;
    }

    store(entity_account, entity)
}
