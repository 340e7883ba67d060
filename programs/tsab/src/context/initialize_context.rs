//! See [`InitializeContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use sol_arc_interface::{
    instructions::tsab::accounts::Initialize,
    state::SYSTEM_PROGRAM_ID,
    utils::check_program,
};

/// The account context for the tsab's [`Initialize`] instruction.
pub struct InitializeContext<'a> {
    pub payer: &'a AccountView,
    pub tsab_config: &'a AccountView,
}

impl<'a> InitializeContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<InitializeContext<'a>, ProgramError> {
        let Initialize {
            payer,
            system_program,
            tsab_config,
        } = Initialize::load_accounts(accounts)?;

        check_program(system_program, &SYSTEM_PROGRAM_ID)?;

        Ok(Self { payer, tsab_config })
    }
}
