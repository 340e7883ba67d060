//! See [`process_add_instances_to_action_bundle_registration`].

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
        registry::AddInstancesToActionBundleRegistrationArgs,
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

/// Allows a registered action bundle to act on more registry instances, growing the registration
/// for the instances it didn't already have.
pub fn process_add_instances_to_action_bundle_registration(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let AddInstancesToActionBundleRegistrationArgs { instances } =
        AddInstancesToActionBundleRegistrationArgs::unpack(instruction_data)?;
    let ctx = RegistrationContext::load_add_instances(accounts)?;

    debug!("AddInstancesToActionBundleRegistration: {}", instances.len());

    ctx.check_registration_address()?;
    let mut registration =
        load::<ActionBundleRegistration>(ctx.action_bundle_registration, &crate::ID)?;
    registration.instances.extend(instances);

    fund_then_resize(
        ctx.payer,
        ctx.action_bundle_registration,
        registration.account_len(),
    )?;
    store(ctx.action_bundle_registration, &registration)
}
