//! See [`InitializeContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use sol_arc_interface::{
    instructions::registry::accounts::Initialize,
    state::SYSTEM_PROGRAM_ID,
    utils::check_program,
};

/// The account context for the [`Initialize`] instruction.
pub struct InitializeContext<'a> {
    pub payer: &'a AccountView,
    pub registry_config: &'a AccountView,
}

impl<'a> InitializeContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<InitializeContext<'a>, ProgramError> {
        let Initialize {
            payer,
            system_program,
            registry_config,
        } = Initialize::load_accounts(accounts)?;

        check_program(system_program, &SYSTEM_PROGRAM_ID)?;

        // The config address and its prior initialization are checked when it is created.
        Ok(Self {
            payer,
            registry_config,
        })
    }
}
