//! Instructions of the token-standard action bundle.

use alloc::collections::BTreeMap;

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_address::Address;

use crate::{
    error::ArcError,
    instructions::InstructionArgs,
    state::tsab::{
        ComponentMetadata,
        ComponentNameHash,
    },
};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(test, derive(strum_macros::FromRepr, strum_macros::EnumIter))]
pub enum TsabInstruction {
    Initialize,
    MintMetadata,
}

impl TryFrom<u8> for TsabInstruction {
    type Error = ArcError;

    #[inline(always)]
    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Ok(match tag {
            0 => Self::Initialize,
            1 => Self::MintMetadata,
            _ => return Err(ArcError::InvalidInstructionTag),
        })
    }
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitializeArgs {
    /// Component name hash to component schema PDA.
    pub components: BTreeMap<ComponentNameHash, Address>,
}

impl InstructionArgs for InitializeArgs {
    const TAG: u8 = TsabInstruction::Initialize as u8;
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MintMetadataArgs {
    pub entity_id: u64,
    pub metadata: ComponentMetadata,
}

impl InstructionArgs for MintMetadataArgs {
    const TAG: u8 = TsabInstruction::MintMetadata as u8;
}

instruction_accounts! {
    program_id: crate::program::tsab::ID;

    /// Creates the tsab config, whose PDA is the tsab's action bundle signer.
    Initialize(super::InitializeArgs) {
        payer: writable_signer,
        system_program: readonly,
        tsab_config: writable,
    }

    /// Creates an entity holding one metadata component and binds `mint` to it.
    MintMetadata(super::MintMetadataArgs) {
        payer: writable_signer,
        system_program: readonly,
        mint: readonly,
        tsab_config: readonly,
        entity: writable,
        arcnft: writable,
        registry_config: readonly,
        registry_program: readonly,
        tsab_registration: readonly,
        core_ds_program: readonly,
        registry_instance: writable,
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn instruction_tags_round_trip() {
        for variant in TsabInstruction::iter() {
            let tag = variant as u8;
            assert_eq!(TsabInstruction::try_from(tag), Ok(variant));
            assert_eq!(TsabInstruction::from_repr(tag), Some(variant));
        }
        assert_eq!(
            TsabInstruction::try_from(2),
            Err(ArcError::InvalidInstructionTag)
        );
    }
}
