//! Contexts of the entity requests an action bundle makes through the registry.
//!
//! Every request checks the same three things before it is forwarded to the core data store: the
//! action bundle signed, its registration names it, and the registration covers the instance of
//! the entity being touched.

use pinocchio::{
    account::AccountView,
    error::ProgramError,
    Address,
};
use sol_arc_interface::{
    accounts::load,
    error::ArcError,
    instructions::registry::accounts::{
        InitEntity,
        MintArcNft,
        ReqAddComponents,
        ReqModifyComponents,
        ReqRemoveComponents,
        ReqRemoveEntity,
    },
    state::{
        core_ds::Entity,
        registry::ActionBundleRegistration,
        SYSTEM_PROGRAM_ID,
    },
    utils::check_program,
};

use crate::validation::{
    load_own_registry_instance,
    RegistrySigner,
};

/// A signed action bundle and its registration.
pub struct ActionBundle<'a> {
    pub account: &'a AccountView,
    pub registration: ActionBundleRegistration,
}

impl<'a> ActionBundle<'a> {
    pub fn load(
        action_bundle: &'a AccountView,
        action_bundle_registration: &'a AccountView,
    ) -> Result<ActionBundle<'a>, ProgramError> {
        if !action_bundle.is_signer() {
            return Err(ArcError::MissingRequiredSignature.into());
        }

        let registration =
            load::<ActionBundleRegistration>(action_bundle_registration, &crate::ID)?;
        if &registration.action_bundle != action_bundle.address() {
            return Err(ArcError::ActionBundleMismatch.into());
        }

        Ok(Self {
            account: action_bundle,
            registration,
        })
    }

    #[inline(always)]
    pub fn check_instance(&self, instance: u64) -> Result<(), ArcError> {
        if !self.registration.instances.contains(&instance) {
            return Err(ArcError::InstanceNotRegistered);
        }
        Ok(())
    }

    #[inline(always)]
    pub fn check_components<'b>(
        &self,
        components: impl Iterator<Item = &'b Address>,
    ) -> Result<(), ArcError> {
        if !self.registration.permits_all(components) {
            return Err(ArcError::ComponentNotPermitted);
        }
        Ok(())
    }

    #[inline(always)]
    pub fn check_can_mint(&self) -> Result<(), ArcError> {
        if !self.registration.can_mint {
            return Err(ArcError::MintNotPermitted);
        }
        Ok(())
    }
}

/// The account context for the registry's [`InitEntity`] instruction.
pub struct InitEntityContext<'a> {
    pub payer: &'a AccountView,
    pub system_program: &'a AccountView,
    pub registry_signer: RegistrySigner<'a>,
    pub entity: &'a AccountView,
    pub registry_instance: &'a AccountView,
    pub action_bundle: ActionBundle<'a>,
    pub core_ds_program: &'a AccountView,
}

impl<'a> InitEntityContext<'a> {
    /// Loads the context and checks the action bundle may create entities in the registry
    /// instance.
    pub fn load(accounts: &'a [AccountView]) -> Result<InitEntityContext<'a>, ProgramError> {
        let InitEntity {
            payer,
            system_program,
            registry_config,
            entity,
            registry_instance,
            action_bundle,
            action_bundle_registration,
            core_ds_program,
        } = InitEntity::load_accounts(accounts)?;

        check_program(system_program, &SYSTEM_PROGRAM_ID)?;
        let registry_signer = RegistrySigner::load(registry_config)?;
        registry_signer.check_core_ds(core_ds_program)?;

        let instance =
            load_own_registry_instance(registry_instance, &registry_signer.config.core_ds)?;
        let action_bundle = ActionBundle::load(action_bundle, action_bundle_registration)?;
        action_bundle.check_instance(instance.instance)?;

        Ok(Self {
            payer,
            system_program,
            registry_signer,
            entity,
            registry_instance,
            action_bundle,
            core_ds_program,
        })
    }
}

/// The account context for the registry's [`MintArcNft`] instruction.
pub struct MintArcNftContext<'a> {
    pub payer: &'a AccountView,
    pub system_program: &'a AccountView,
    pub registry_signer: RegistrySigner<'a>,
    pub entity: &'a AccountView,
    pub mint: &'a AccountView,
    pub arcnft: &'a AccountView,
    pub registry_instance: &'a AccountView,
    pub core_ds_program: &'a AccountView,
}

impl<'a> MintArcNftContext<'a> {
    /// Loads the context and checks the action bundle may mint in the registry instance.
    pub fn load(accounts: &'a [AccountView]) -> Result<MintArcNftContext<'a>, ProgramError> {
        let MintArcNft {
            payer,
            system_program,
            registry_config,
            entity,
            mint,
            arcnft,
            registry_instance,
            action_bundle,
            action_bundle_registration,
            core_ds_program,
        } = MintArcNft::load_accounts(accounts)?;

        check_program(system_program, &SYSTEM_PROGRAM_ID)?;
        let registry_signer = RegistrySigner::load(registry_config)?;
        registry_signer.check_core_ds(core_ds_program)?;

        let instance =
            load_own_registry_instance(registry_instance, &registry_signer.config.core_ds)?;
        let action_bundle = ActionBundle::load(action_bundle, action_bundle_registration)?;
        action_bundle.check_instance(instance.instance)?;
        action_bundle.check_can_mint()?;

        // The core data store checks the entity belongs to the registry instance and the mint.
        Ok(Self {
            payer,
            system_program,
            registry_signer,
            entity,
            mint,
            arcnft,
            registry_instance,
            core_ds_program,
        })
    }
}

/// The account that funds an entity's growth or receives its freed rent, with the system program
/// the core data store needs to move lamports.
pub struct Funding<'a> {
    pub funder: &'a AccountView,
    pub system_program: &'a AccountView,
}

/// The account context shared by the requests that touch an existing entity.
pub struct EntityRequestContext<'a> {
    pub registry_signer: RegistrySigner<'a>,
    pub entity_account: &'a AccountView,
    pub entity: Entity,
    pub action_bundle: ActionBundle<'a>,
    pub core_ds_program: &'a AccountView,
}

impl<'a> EntityRequestContext<'a> {
    fn new(
        registry_config: &'a AccountView,
        entity_account: &'a AccountView,
        action_bundle: &'a AccountView,
        action_bundle_registration: &'a AccountView,
        core_ds_program: &'a AccountView,
    ) -> Result<EntityRequestContext<'a>, ProgramError> {
        let registry_signer = RegistrySigner::load(registry_config)?;
        registry_signer.check_core_ds(core_ds_program)?;

        let entity = load::<Entity>(entity_account, &registry_signer.config.core_ds)?;
        if entity.registry != crate::ID {
            return Err(ArcError::InstanceMismatch.into());
        }

        let action_bundle = ActionBundle::load(action_bundle, action_bundle_registration)?;
        action_bundle.check_instance(entity.instance)?;

        Ok(Self {
            registry_signer,
            entity_account,
            entity,
            action_bundle,
            core_ds_program,
        })
    }

    fn funding(
        funder: &'a AccountView,
        system_program: &'a AccountView,
    ) -> Result<Funding<'a>, ProgramError> {
        check_program(system_program, &SYSTEM_PROGRAM_ID)?;
        Ok(Funding {
            funder,
            system_program,
        })
    }

    pub fn load_add_components(
        accounts: &'a [AccountView],
    ) -> Result<(Funding<'a>, Self), ProgramError> {
        let ReqAddComponents {
            payer,
            system_program,
            registry_config,
            entity,
            action_bundle,
            action_bundle_registration,
            core_ds_program,
        } = ReqAddComponents::load_accounts(accounts)?;
        Ok((
            Self::funding(payer, system_program)?,
            Self::new(
                registry_config,
                entity,
                action_bundle,
                action_bundle_registration,
                core_ds_program,
            )?,
        ))
    }

    pub fn load_remove_components(
        accounts: &'a [AccountView],
    ) -> Result<(Funding<'a>, Self), ProgramError> {
        let ReqRemoveComponents {
            benefactor,
            system_program,
            registry_config,
            entity,
            action_bundle,
            action_bundle_registration,
            core_ds_program,
        } = ReqRemoveComponents::load_accounts(accounts)?;
        Ok((
            Self::funding(benefactor, system_program)?,
            Self::new(
                registry_config,
                entity,
                action_bundle,
                action_bundle_registration,
                core_ds_program,
            )?,
        ))
    }

    pub fn load_modify_components(accounts: &'a [AccountView]) -> Result<Self, ProgramError> {
        let ReqModifyComponents {
            registry_config,
            entity,
            action_bundle,
            action_bundle_registration,
            core_ds_program,
        } = ReqModifyComponents::load_accounts(accounts)?;
        Self::new(
            registry_config,
            entity,
            action_bundle,
            action_bundle_registration,
            core_ds_program,
        )
    }

    /// Any registered action bundle may remove an empty entity, so no component is checked.
    pub fn load_remove_entity(
        accounts: &'a [AccountView],
    ) -> Result<(Funding<'a>, Self), ProgramError> {
        let ReqRemoveEntity {
            benefactor,
            system_program,
            registry_config,
            entity,
            action_bundle,
            action_bundle_registration,
            core_ds_program,
        } = ReqRemoveEntity::load_accounts(accounts)?;
        Ok((
            Self::funding(benefactor, system_program)?,
            Self::new(
                registry_config,
                entity,
                action_bundle,
                action_bundle_registration,
                core_ds_program,
            )?,
        ))
    }
}
