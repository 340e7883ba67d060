//! See [`InstanceRegistryContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use sol_arc_interface::{
    instructions::registry::accounts::InstanceRegistry,
    state::SYSTEM_PROGRAM_ID,
    utils::check_program,
};

use crate::validation::RegistrySigner;

/// The account context for the [`InstanceRegistry`] instruction.
pub struct InstanceRegistryContext<'a> {
    pub payer: &'a AccountView,
    pub system_program: &'a AccountView,
    pub registry_signer: RegistrySigner<'a>,
    pub registry_instance: &'a AccountView,
    pub instance_authority: &'a AccountView,
    pub core_ds_program: &'a AccountView,
}

impl<'a> InstanceRegistryContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<InstanceRegistryContext<'a>, ProgramError> {
        let InstanceRegistry {
            payer,
            system_program,
            registry_config,
            registry_instance,
            instance_authority,
            core_ds_program,
        } = InstanceRegistry::load_accounts(accounts)?;

        check_program(system_program, &SYSTEM_PROGRAM_ID)?;
        let registry_signer = RegistrySigner::load(registry_config)?;
        registry_signer.check_core_ds(core_ds_program)?;

        // The core data store checks the registry instance derivation.
        Ok(Self {
            payer,
            system_program,
            registry_signer,
            registry_instance,
            instance_authority,
            core_ds_program,
        })
    }
}
