//! See [`process_register_action_bundle`].

use std::collections::BTreeSet;

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use sol_arc_interface::{
    accounts::{
        init_pda_account,
        signer_seeds,
    },
    instructions::{
        registry::RegisterActionBundleArgs,
        InstructionArgs,
    },
    seeds::ACTION_BUNDLE_REGISTRATION_SEED,
    state::registry::ActionBundleRegistration,
};

use crate::{
    context::registration_context::RegistrationContext,
    debug,
};

/// Registers an action bundle on a registry instance. The bundle starts out allowed to mint and
/// with no component permissions.
pub fn process_register_action_bundle(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let RegisterActionBundleArgs = RegisterActionBundleArgs::unpack(instruction_data)?;
    let ctx = RegistrationContext::load_register(accounts)?;

    debug!("RegisterActionBundle: {}", ctx.registry_instance.instance);

    let bump = [ctx.check_registration_address()?];
    let seeds: &[&[u8]] = &[
        ACTION_BUNDLE_REGISTRATION_SEED,
        ctx.registry_instance_account.address().as_ref(),
        ctx.action_bundle.address().as_ref(),
    ];

    init_pda_account(
        ctx.payer,
        ctx.action_bundle_registration,
        &crate::ID,
        &signer_seeds(seeds, &bump),
        &ActionBundleRegistration {
            action_bundle: *ctx.action_bundle.address(),
            instances: BTreeSet::from([ctx.registry_instance.instance]),
            can_mint: true,
            components: BTreeSet::new(),
        },
    )
}
