//! See [`InitRegistryContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
    Address,
};
use sol_arc_interface::{
    instructions::core_ds::accounts::InitRegistry,
    state::SYSTEM_PROGRAM_ID,
    utils::check_program,
};

use crate::validation::check_registry_signer;

/// The account context for the [`InitRegistry`] instruction.
pub struct InitRegistryContext<'a> {
    pub payer: &'a AccountView,
    pub registry_instance: &'a AccountView,
}

impl<'a> InitRegistryContext<'a> {
    pub fn load(
        accounts: &'a [AccountView],
        registry: &Address,
    ) -> Result<InitRegistryContext<'a>, ProgramError> {
        let InitRegistry {
            payer,
            system_program,
            registry_instance,
            registry_signer,
        } = InitRegistry::load_accounts(accounts)?;

        check_program(system_program, &SYSTEM_PROGRAM_ID)?;
        // Only the registry itself may create instances of itself.
        check_registry_signer(registry_signer, registry)?;

        // The instance address is checked against its derivation when it is created.
        Ok(Self {
            payer,
            registry_instance,
        })
    }
}
