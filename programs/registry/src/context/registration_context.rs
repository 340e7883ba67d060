//! See [`RegistrationContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use sol_arc_interface::{
    accounts::check_pda,
    error::ArcError,
    instructions::registry::accounts::{
        AddComponentsToActionBundleRegistration,
        AddInstancesToActionBundleRegistration,
        RegisterActionBundle,
    },
    seeds::ACTION_BUNDLE_REGISTRATION_SEED,
    state::{
        core_ds::RegistryInstance,
        SYSTEM_PROGRAM_ID,
    },
    utils::check_program,
};

use crate::validation::{
    check_instance_authority,
    load_own_registry_instance,
    RegistrySigner,
};

/// Loads one of the registration instructions' identical account lists into a
/// [`RegistrationContext`], checking the instance authority of its registry instance.
macro_rules! load_registration {
    ($instruction:ident, $accounts:expr) => {{
        let $instruction {
            payer,
            system_program,
            registry_config,
            registry_instance,
            instance_authority,
            authority,
            action_bundle_registration,
            action_bundle,
        } = $instruction::load_accounts($accounts)?;

        check_program(system_program, &SYSTEM_PROGRAM_ID)?;
        let registry_signer = RegistrySigner::load(registry_config)?;
        let instance =
            load_own_registry_instance(registry_instance, &registry_signer.config.core_ds)?;
        check_instance_authority(
            instance_authority,
            authority,
            registry_instance.address(),
            &instance,
        )?;

        Ok(RegistrationContext {
            payer,
            registry_instance_account: registry_instance,
            registry_instance: instance,
            action_bundle_registration,
            action_bundle,
        })
    }};
}

/// The account context shared by the instructions that create or extend an action bundle
/// registration. All of them must be signed by the instance authority of the registry instance.
pub struct RegistrationContext<'a> {
    pub payer: &'a AccountView,
    pub registry_instance_account: &'a AccountView,
    pub registry_instance: RegistryInstance,
    pub action_bundle_registration: &'a AccountView,
    pub action_bundle: &'a AccountView,
}

impl<'a> RegistrationContext<'a> {
    /// Checks the registration is the PDA
    /// `["action_bundle_registration", registry_instance, action_bundle]` and returns its bump.
    #[inline(always)]
    pub fn check_registration_address(&self) -> Result<u8, ArcError> {
        check_pda(
            self.action_bundle_registration,
            &[
                ACTION_BUNDLE_REGISTRATION_SEED,
                self.registry_instance_account.address().as_ref(),
                self.action_bundle.address().as_ref(),
            ],
            &crate::ID,
        )
    }

    pub fn load_register(accounts: &'a [AccountView]) -> Result<Self, ProgramError> {
        load_registration!(RegisterActionBundle, accounts)
    }

    pub fn load_add_components(accounts: &'a [AccountView]) -> Result<Self, ProgramError> {
        load_registration!(AddComponentsToActionBundleRegistration, accounts)
    }

    pub fn load_add_instances(accounts: &'a [AccountView]) -> Result<Self, ProgramError> {
        load_registration!(AddInstancesToActionBundleRegistration, accounts)
    }
}
