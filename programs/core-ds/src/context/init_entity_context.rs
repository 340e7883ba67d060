//! See [`InitEntityContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use sol_arc_interface::{
    accounts::load,
    instructions::core_ds::accounts::InitEntity,
    state::{
        core_ds::RegistryInstance,
        SYSTEM_PROGRAM_ID,
    },
    utils::check_program,
};

use crate::validation::check_registry_signer;

/// The account context for the [`InitEntity`] instruction. Holds the loaded registry instance the
/// entity is created in.
pub struct InitEntityContext<'a> {
    pub payer: &'a AccountView,
    pub registry_instance_account: &'a AccountView,
    pub registry_instance: RegistryInstance,
    pub entity: &'a AccountView,
}

impl<'a> InitEntityContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<InitEntityContext<'a>, ProgramError> {
        let InitEntity {
            payer,
            system_program,
            registry_instance,
            entity,
            registry_signer,
        } = InitEntity::load_accounts(accounts)?;

        check_program(system_program, &SYSTEM_PROGRAM_ID)?;
        let registry_instance_state = load::<RegistryInstance>(registry_instance, &crate::ID)?;
        check_registry_signer(registry_signer, &registry_instance_state.registry)?;

        Ok(Self {
            payer,
            registry_instance_account: registry_instance,
            registry_instance: registry_instance_state,
            entity,
        })
    }
}
