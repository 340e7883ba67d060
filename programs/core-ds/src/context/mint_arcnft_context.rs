//! See [`MintArcNftContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use sol_arc_interface::{
    accounts::load,
    error::ArcError,
    instructions::core_ds::accounts::MintArcNft,
    state::{
        core_ds::{
            Entity,
            RegistryInstance,
        },
        SYSTEM_PROGRAM_ID,
    },
    utils::{
        check_mint,
        check_program,
    },
};

use crate::validation::check_registry_signer;

/// The account context for the [`MintArcNft`] instruction.
pub struct MintArcNftContext<'a> {
    pub payer: &'a AccountView,
    pub entity: &'a AccountView,
    pub mint: &'a AccountView,
    pub arcnft: &'a AccountView,
}

impl<'a> MintArcNftContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<MintArcNftContext<'a>, ProgramError> {
        let MintArcNft {
            payer,
            system_program,
            registry_instance,
            entity,
            mint,
            arcnft,
            registry_signer,
        } = MintArcNft::load_accounts(accounts)?;

        check_program(system_program, &SYSTEM_PROGRAM_ID)?;
        let registry_instance_state = load::<RegistryInstance>(registry_instance, &crate::ID)?;
        check_registry_signer(registry_signer, &registry_instance_state.registry)?;

        let entity_state = load::<Entity>(entity, &crate::ID)?;
        if entity_state.registry != registry_instance_state.registry
            || entity_state.instance != registry_instance_state.instance
        {
            return Err(ArcError::InstanceMismatch.into());
        }

        check_mint(mint)?;

        Ok(Self {
            payer,
            entity,
            mint,
            arcnft,
        })
    }
}
