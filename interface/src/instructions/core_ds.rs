//! Instructions of the core data store. Every mutating instruction must be signed by the registry
//! signer PDA of the registry that owns the touched instance or entity.

use alloc::{
    collections::BTreeMap,
    vec::Vec,
};

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_address::Address;

use crate::{
    error::ArcError,
    instructions::InstructionArgs,
    state::core_ds::SerializedComponent,
};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(test, derive(strum_macros::FromRepr, strum_macros::EnumIter))]
pub enum CoreDsInstruction {
    InitRegistry,
    InitEntity,
    MintArcNft,
    AddComponents,
    RemoveComponents,
    ModifyComponents,
    RemoveEntity,
}

impl TryFrom<u8> for CoreDsInstruction {
    type Error = ArcError;

    #[inline(always)]
    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Ok(match tag {
            0 => Self::InitRegistry,
            1 => Self::InitEntity,
            2 => Self::MintArcNft,
            3 => Self::AddComponents,
            4 => Self::RemoveComponents,
            5 => Self::ModifyComponents,
            6 => Self::RemoveEntity,
            _ => return Err(ArcError::InvalidInstructionTag),
        })
    }
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitRegistryArgs {
    pub registry: Address,
    pub instance: u64,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitEntityArgs {
    pub entity_id: u64,
    pub components: BTreeMap<Address, SerializedComponent>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MintArcNftArgs;

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AddComponentsArgs {
    pub components: Vec<(Address, SerializedComponent)>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RemoveComponentsArgs {
    pub components: Vec<Address>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ModifyComponentsArgs {
    pub components: Vec<(Address, Vec<u8>)>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RemoveEntityArgs;

macro_rules! impl_args {
    ($($args:ty => $variant:ident),+ $(,)?) => {
        $(
            impl InstructionArgs for $args {
                const TAG: u8 = CoreDsInstruction::$variant as u8;
            }
        )+
    };
}

impl_args! {
    InitRegistryArgs => InitRegistry,
    InitEntityArgs => InitEntity,
    MintArcNftArgs => MintArcNft,
    AddComponentsArgs => AddComponents,
    RemoveComponentsArgs => RemoveComponents,
    ModifyComponentsArgs => ModifyComponents,
    RemoveEntityArgs => RemoveEntity,
}

instruction_accounts! {
    program_id: crate::program::core_ds::ID;

    /// Creates a registry instance PDA for `registry`.
    InitRegistry(super::InitRegistryArgs) {
        payer: writable_signer,
        system_program: readonly,
        registry_instance: writable,
        registry_signer: readonly_signer,
    }

    /// Creates an entity PDA in a registry instance, sized for its initial components.
    InitEntity(super::InitEntityArgs) {
        payer: writable_signer,
        system_program: readonly,
        registry_instance: writable,
        entity: writable,
        registry_signer: readonly_signer,
    }

    /// Binds an SPL mint to an entity with an ARC-NFT PDA.
    MintArcNft(super::MintArcNftArgs) {
        payer: writable_signer,
        system_program: readonly,
        registry_instance: readonly,
        entity: readonly,
        mint: readonly,
        arcnft: writable,
        registry_signer: readonly_signer,
    }

    AddComponents(super::AddComponentsArgs) {
        payer: writable_signer,
        system_program: readonly,
        entity: writable,
        registry_signer: readonly_signer,
    }

    RemoveComponents(super::RemoveComponentsArgs) {
        benefactor: writable_signer,
        system_program: readonly,
        entity: writable,
        registry_signer: readonly_signer,
    }

    ModifyComponents(super::ModifyComponentsArgs) {
        entity: writable,
        registry_signer: readonly_signer,
    }

    /// Closes an entity that has no components left.
    RemoveEntity(super::RemoveEntityArgs) {
        benefactor: writable_signer,
        system_program: readonly,
        entity: writable,
        registry_signer: readonly_signer,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn instruction_tags_round_trip() {
        for variant in CoreDsInstruction::iter() {
            let tag = variant as u8;
            assert_eq!(CoreDsInstruction::try_from(tag), Ok(variant));
            assert_eq!(CoreDsInstruction::from_repr(tag), Some(variant));
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        let count = CoreDsInstruction::iter().count() as u8;
        for tag in count..=u8::MAX {
            assert_eq!(
                CoreDsInstruction::try_from(tag),
                Err(ArcError::InvalidInstructionTag)
            );
        }
    }

    #[test]
    fn packed_data_starts_with_tag() {
        let args = ModifyComponentsArgs {
            components: vec![(Address::new_from_array([7; 32]), vec![1, 2, 3])],
        };
        let data = args.pack().unwrap();
        assert_eq!(data[0], CoreDsInstruction::ModifyComponents as u8);
        assert_eq!(ModifyComponentsArgs::unpack(&data[1..]), Ok(args));

        assert_eq!(MintArcNftArgs.pack().unwrap(), vec![2]);
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let mut data = InitRegistryArgs {
            registry: Address::new_from_array([1; 32]),
            instance: 0,
        }
        .pack()
        .unwrap();
        data.push(0);
        assert_eq!(
            InitRegistryArgs::unpack(&data[1..]),
            Err(ArcError::InvalidInstructionData)
        );
        assert_eq!(
            RemoveEntityArgs::unpack(&[0]),
            Err(ArcError::InvalidInstructionData)
        );
    }
}
