//! Validated views over the registry's own accounts.

use pinocchio::{
    account::AccountView,
    error::ProgramError,
    Address,
};
use sol_arc_interface::{
    accounts::{
        check_pda,
        load,
        signer_seeds,
    },
    error::ArcError,
    seeds::{
        INSTANCE_AUTHORITY_SEED,
        REGISTRY_SIGNER_SEED,
    },
    state::{
        core_ds::RegistryInstance,
        registry::{
            InstanceAuthority,
            RegistryConfig,
        },
    },
    utils::check_program,
};
use solana_instruction_view::cpi::Seed;

/// The registry config. Its PDA is also the signer of every CPI into the core data store.
pub struct RegistrySigner<'a> {
    pub account: &'a AccountView,
    pub config: RegistryConfig,
    bump: [u8; 1],
}

impl<'a> RegistrySigner<'a> {
    pub fn load(account: &'a AccountView) -> Result<RegistrySigner<'a>, ProgramError> {
        let bump = check_pda(account, &[REGISTRY_SIGNER_SEED], &crate::ID)?;
        let config = load::<RegistryConfig>(account, &crate::ID)?;

        Ok(Self {
            account,
            config,
            bump: [bump],
        })
    }

    /// Checks `core_ds_program` is the core data store this registry was initialized with.
    #[inline(always)]
    pub fn check_core_ds(&self, core_ds_program: &AccountView) -> Result<(), ArcError> {
        check_program(core_ds_program, &self.config.core_ds)
    }

    #[inline(always)]
    pub fn seeds(&self) -> Vec<Seed<'_>> {
        signer_seeds(&[REGISTRY_SIGNER_SEED], &self.bump)
    }
}

/// Loads a registry instance owned by `core_ds` and checks it is an instance of this registry.
pub fn load_own_registry_instance(
    account: &AccountView,
    core_ds: &Address,
) -> Result<RegistryInstance, ProgramError> {
    let registry_instance = load::<RegistryInstance>(account, core_ds)?;
    if registry_instance.registry != crate::ID {
        return Err(ArcError::InstanceMismatch.into());
    }
    Ok(registry_instance)
}

/// Checks that `authority` signed and is the instance authority of the registry instance at
/// `registry_instance_address`.
pub fn check_instance_authority(
    instance_authority: &AccountView,
    authority: &AccountView,
    registry_instance_address: &Address,
    registry_instance: &RegistryInstance,
) -> Result<(), ProgramError> {
    check_pda(
        instance_authority,
        &[INSTANCE_AUTHORITY_SEED, registry_instance_address.as_ref()],
        &crate::ID,
    )?;
    let state = load::<InstanceAuthority>(instance_authority, &crate::ID)?;

    if state.instance != registry_instance.instance {
        return Err(ArcError::InstanceMismatch.into());
    }
    if !authority.is_signer() {
        return Err(ArcError::MissingRequiredSignature.into());
    }
    if &state.authority != authority.address() {
        return Err(ArcError::InvalidInstanceAuthority.into());
    }

    Ok(())
}
