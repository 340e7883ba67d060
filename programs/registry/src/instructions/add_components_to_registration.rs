//! See [`process_add_components_to_action_bundle_registration`].

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use sol_arc_interface::{
    accounts::{
        fund_then_resize,
        load,
        store,
    },
    instructions::{
        registry::AddComponentsToActionBundleRegistrationArgs,
        InstructionArgs,
    },
    state::{
        registry::ActionBundleRegistration,
        ProgramAccount,
    },
};

use crate::{
    context::registration_context::RegistrationContext,
    debug,
};

/// Allows a registered action bundle to write the given component schemas, growing the
/// registration for the components it didn't already have.
pub fn process_add_components_to_action_bundle_registration(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let AddComponentsToActionBundleRegistrationArgs { components } =
        AddComponentsToActionBundleRegistrationArgs::unpack(instruction_data)?;
    let ctx = RegistrationContext::load_add_components(accounts)?;

    debug!("AddComponentsToActionBundleRegistration: {}", components.len());

    ctx.check_registration_address()?;
    let mut registration =
        load::<ActionBundleRegistration>(ctx.action_bundle_registration, &crate::ID)?;
    registration.components.extend(components);

    fund_then_resize(
        ctx.payer,
        ctx.action_bundle_registration,
        registration.account_len(),
    )?;
    store(ctx.action_bundle_registration, &registration)
}
