//! See [`EntityContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use sol_arc_interface::{
    accounts::load,
    instructions::core_ds::accounts::{
        AddComponents,
        ModifyComponents,
        RemoveComponents,
        RemoveEntity,
    },
    state::{
        core_ds::Entity,
        SYSTEM_PROGRAM_ID,
    },
    utils::check_program,
};

use crate::validation::check_registry_signer;

/// The account context shared by every instruction that mutates an existing entity. Holds the
/// loaded entity, already checked to belong to the registry that signed.
pub struct EntityContext<'a> {
    pub entity_account: &'a AccountView,
    pub entity: Entity,
}

impl<'a> EntityContext<'a> {
    fn new(
        system_program: Option<&'a AccountView>,
        entity_account: &'a AccountView,
        registry_signer: &'a AccountView,
    ) -> Result<EntityContext<'a>, ProgramError> {
        if let Some(system_program) = system_program {
            check_program(system_program, &SYSTEM_PROGRAM_ID)?;
        }
        let entity = load::<Entity>(entity_account, &crate::ID)?;
        check_registry_signer(registry_signer, &entity.registry)?;

        Ok(Self {
            entity_account,
            entity,
        })
    }

    /// Returns the payer funding the entity's growth alongside the context.
    pub fn load_add_components(
        accounts: &'a [AccountView],
    ) -> Result<(&'a AccountView, Self), ProgramError> {
        let AddComponents {
            payer,
            system_program,
            entity,
            registry_signer,
        } = AddComponents::load_accounts(accounts)?;
        Ok((payer, Self::new(Some(system_program), entity, registry_signer)?))
    }

    /// Returns the benefactor receiving the freed rent alongside the context.
    pub fn load_remove_components(
        accounts: &'a [AccountView],
    ) -> Result<(&'a AccountView, Self), ProgramError> {
        let RemoveComponents {
            benefactor,
            system_program,
            entity,
            registry_signer,
        } = RemoveComponents::load_accounts(accounts)?;
        Ok((benefactor, Self::new(Some(system_program), entity, registry_signer)?))
    }

    pub fn load_modify_components(accounts: &'a [AccountView]) -> Result<Self, ProgramError> {
        let ModifyComponents {
            entity,
            registry_signer,
        } = ModifyComponents::load_accounts(accounts)?;
        Self::new(None, entity, registry_signer)
    }

    /// Returns the benefactor receiving the entity's lamports alongside the context.
    pub fn load_remove_entity(
        accounts: &'a [AccountView],
    ) -> Result<(&'a AccountView, Self), ProgramError> {
        let RemoveEntity {
            benefactor,
            system_program,
            entity,
            registry_signer,
        } = RemoveEntity::load_accounts(accounts)?;
        Ok((benefactor, Self::new(Some(system_program), entity, registry_signer)?))
    }
}
