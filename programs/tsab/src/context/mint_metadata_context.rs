//! See [`MintMetadataContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use sol_arc_interface::{
    accounts::{
        check_pda,
        load,
        signer_seeds,
    },
    instructions::tsab::accounts::MintMetadata,
    program,
    seeds::TSAB_SIGNER_SEED,
    state::{
        tsab::TsabConfig,
        SYSTEM_PROGRAM_ID,
    },
    utils::{
        check_mint,
        check_program,
    },
};
use solana_instruction_view::cpi::Seed;

/// The account context for the [`MintMetadata`] instruction.
///
/// The registry checks the tsab's registration and the registry accounts, and the core data store
/// checks the entity and ARC-NFT derivations, so only the tsab's own accounts are checked here.
pub struct MintMetadataContext<'a> {
    pub payer: &'a AccountView,
    pub system_program: &'a AccountView,
    pub mint: &'a AccountView,
    pub tsab_config_account: &'a AccountView,
    pub tsab_config: TsabConfig,
    tsab_config_bump: [u8; 1],
    pub entity: &'a AccountView,
    pub arcnft: &'a AccountView,
    pub registry_config: &'a AccountView,
    pub registry_program: &'a AccountView,
    pub tsab_registration: &'a AccountView,
    pub core_ds_program: &'a AccountView,
    pub registry_instance: &'a AccountView,
}

impl<'a> MintMetadataContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<MintMetadataContext<'a>, ProgramError> {
        let MintMetadata {
            payer,
            system_program,
            mint,
            tsab_config,
            entity,
            arcnft,
            registry_config,
            registry_program,
            tsab_registration,
            core_ds_program,
            registry_instance,
        } = MintMetadata::load_accounts(accounts)?;

        check_program(system_program, &SYSTEM_PROGRAM_ID)?;
        check_program(registry_program, &program::registry::ID)?;
        check_mint(mint)?;

        let bump = check_pda(tsab_config, &[TSAB_SIGNER_SEED], &crate::ID)?;
        let tsab_config_state = load::<TsabConfig>(tsab_config, &crate::ID)?;

        Ok(Self {
            payer,
            system_program,
            mint,
            tsab_config_account: tsab_config,
            tsab_config: tsab_config_state,
            tsab_config_bump: [bump],
            entity,
            arcnft,
            registry_config,
            registry_program,
            tsab_registration,
            core_ds_program,
            registry_instance,
        })
    }

    /// The seeds the tsab config PDA signs with.
    #[inline(always)]
    pub fn tsab_signer_seeds(&self) -> Vec<Seed<'_>> {
        signer_seeds(&[TSAB_SIGNER_SEED], &self.tsab_config_bump)
    }
}
