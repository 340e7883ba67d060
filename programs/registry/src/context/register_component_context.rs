//! See [`RegisterComponentContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use sol_arc_interface::{
    instructions::registry::accounts::RegisterComponent,
    state::SYSTEM_PROGRAM_ID,
    utils::check_program,
};

use crate::validation::RegistrySigner;

/// The account context for the [`RegisterComponent`] instruction.
pub struct RegisterComponentContext<'a> {
    pub payer: &'a AccountView,
    pub component: &'a AccountView,
    pub registry_signer: RegistrySigner<'a>,
}

impl<'a> RegisterComponentContext<'a> {
    pub fn load(
        accounts: &'a [AccountView],
    ) -> Result<RegisterComponentContext<'a>, ProgramError> {
        let RegisterComponent {
            payer,
            system_program,
            component,
            registry_config,
        } = RegisterComponent::load_accounts(accounts)?;

        check_program(system_program, &SYSTEM_PROGRAM_ID)?;
        let registry_signer = RegistrySigner::load(registry_config)?;

        Ok(Self {
            payer,
            component,
            registry_signer,
        })
    }
}
