//! Instructions of the registry. Entity instructions are requests made by a registered action
//! bundle; the registry checks the bundle's permissions and forwards them to the core data store.

use alloc::{
    collections::BTreeMap,
    string::String,
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
pub enum RegistryInstruction {
    Initialize,
    InstanceRegistry,
    RegisterComponent,
    RegisterActionBundle,
    AddComponentsToActionBundleRegistration,
    AddInstancesToActionBundleRegistration,
    InitEntity,
    MintArcNft,
    ReqAddComponents,
    ReqRemoveComponents,
    ReqModifyComponents,
    ReqRemoveEntity,
}

impl TryFrom<u8> for RegistryInstruction {
    type Error = ArcError;

    #[inline(always)]
    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Ok(match tag {
            0 => Self::Initialize,
            1 => Self::InstanceRegistry,
            2 => Self::RegisterComponent,
            3 => Self::RegisterActionBundle,
            4 => Self::AddComponentsToActionBundleRegistration,
            5 => Self::AddInstancesToActionBundleRegistration,
            6 => Self::InitEntity,
            7 => Self::MintArcNft,
            8 => Self::ReqAddComponents,
            9 => Self::ReqRemoveComponents,
            10 => Self::ReqModifyComponents,
            11 => Self::ReqRemoveEntity,
            _ => return Err(ArcError::InvalidInstructionTag),
        })
    }
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitializeArgs {
    pub core_ds: Address,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InstanceRegistryArgs {
    pub instance: u64,
}

/// The schema is both the seed of the component's PDA and the URL stored in it.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RegisterComponentArgs {
    pub schema: String,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RegisterActionBundleArgs;

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AddComponentsToActionBundleRegistrationArgs {
    pub components: Vec<Address>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AddInstancesToActionBundleRegistrationArgs {
    pub instances: Vec<u64>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitEntityArgs {
    pub entity_id: u64,
    pub components: BTreeMap<Address, SerializedComponent>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MintArcNftArgs;

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReqAddComponentsArgs {
    pub components: Vec<(Address, SerializedComponent)>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReqRemoveComponentsArgs {
    pub components: Vec<Address>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReqModifyComponentsArgs {
    pub components: Vec<(Address, Vec<u8>)>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReqRemoveEntityArgs;

macro_rules! impl_args {
    ($($args:ty => $variant:ident),+ $(,)?) => {
        $(
            impl InstructionArgs for $args {
                const TAG: u8 = RegistryInstruction::$variant as u8;
            }
        )+
    };
}

impl_args! {
    InitializeArgs => Initialize,
    InstanceRegistryArgs => InstanceRegistry,
    RegisterComponentArgs => RegisterComponent,
    RegisterActionBundleArgs => RegisterActionBundle,
    AddComponentsToActionBundleRegistrationArgs => AddComponentsToActionBundleRegistration,
    AddInstancesToActionBundleRegistrationArgs => AddInstancesToActionBundleRegistration,
    InitEntityArgs => InitEntity,
    MintArcNftArgs => MintArcNft,
    ReqAddComponentsArgs => ReqAddComponents,
    ReqRemoveComponentsArgs => ReqRemoveComponents,
    ReqModifyComponentsArgs => ReqModifyComponents,
    ReqRemoveEntityArgs => ReqRemoveEntity,
}

instruction_accounts! {
    program_id: crate::program::registry::ID;

    /// Creates the registry config, whose PDA signs every CPI into the core data store.
    Initialize(super::InitializeArgs) {
        payer: writable_signer,
        system_program: readonly,
        registry_config: writable,
    }

    /// Creates a registry instance in the core data store and makes the payer its authority.
    InstanceRegistry(super::InstanceRegistryArgs) {
        payer: writable_signer,
        system_program: readonly,
        registry_config: readonly,
        registry_instance: writable,
        instance_authority: writable,
        core_ds_program: readonly,
    }

    RegisterComponent(super::RegisterComponentArgs) {
        payer: writable_signer,
        system_program: readonly,
        component: writable,
        registry_config: writable,
    }

    /// Registers an action bundle on one instance. Signed by the instance authority.
    RegisterActionBundle(super::RegisterActionBundleArgs) {
        payer: writable_signer,
        system_program: readonly,
        registry_config: readonly,
        registry_instance: readonly,
        instance_authority: readonly,
        authority: readonly_signer,
        action_bundle_registration: writable,
        action_bundle: readonly,
    }

    AddComponentsToActionBundleRegistration(super::AddComponentsToActionBundleRegistrationArgs) {
        payer: writable_signer,
        system_program: readonly,
        registry_config: readonly,
        registry_instance: readonly,
        instance_authority: readonly,
        authority: readonly_signer,
        action_bundle_registration: writable,
        action_bundle: readonly,
    }

    AddInstancesToActionBundleRegistration(super::AddInstancesToActionBundleRegistrationArgs) {
        payer: writable_signer,
        system_program: readonly,
        registry_config: readonly,
        registry_instance: readonly,
        instance_authority: readonly,
        authority: readonly_signer,
        action_bundle_registration: writable,
        action_bundle: readonly,
    }

    InitEntity(super::InitEntityArgs) {
        payer: writable_signer,
        system_program: readonly,
        registry_config: readonly,
        entity: writable,
        registry_instance: writable,
        action_bundle: readonly_signer,
        action_bundle_registration: readonly,
        core_ds_program: readonly,
    }

    MintArcNft(super::MintArcNftArgs) {
        payer: writable_signer,
        system_program: readonly,
        registry_config: readonly,
        entity: readonly,
        mint: readonly,
        arcnft: writable,
        registry_instance: readonly,
        action_bundle: readonly_signer,
        action_bundle_registration: readonly,
        core_ds_program: readonly,
    }

    ReqAddComponents(super::ReqAddComponentsArgs) {
        payer: writable_signer,
        system_program: readonly,
        registry_config: readonly,
        entity: writable,
        action_bundle: readonly_signer,
        action_bundle_registration: readonly,
        core_ds_program: readonly,
    }

    ReqRemoveComponents(super::ReqRemoveComponentsArgs) {
        benefactor: writable_signer,
        system_program: readonly,
        registry_config: readonly,
        entity: writable,
        action_bundle: readonly_signer,
        action_bundle_registration: readonly,
        core_ds_program: readonly,
    }

    ReqModifyComponents(super::ReqModifyComponentsArgs) {
        registry_config: readonly,
        entity: writable,
        action_bundle: readonly_signer,
        action_bundle_registration: readonly,
        core_ds_program: readonly,
    }

    ReqRemoveEntity(super::ReqRemoveEntityArgs) {
        benefactor: writable_signer,
        system_program: readonly,
        registry_config: readonly,
        entity: writable,
        action_bundle: readonly_signer,
        action_bundle_registration: readonly,
        core_ds_program: readonly,
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn instruction_tags_round_trip() {
        for variant in RegistryInstruction::iter() {
            let tag = variant as u8;
            assert_eq!(RegistryInstruction::try_from(tag), Ok(variant));
            assert_eq!(RegistryInstruction::from_repr(tag), Some(variant));
        }
        assert_eq!(
            RegistryInstruction::try_from(RegistryInstruction::iter().count() as u8),
            Err(ArcError::InvalidInstructionTag)
        );
    }

    #[test]
    fn initialize_data_is_tag_and_core_ds_id() {
        let data = InitializeArgs {
            core_ds: crate::program::core_ds::ID,
        }
        .pack()
        .unwrap();
        assert_eq!(data.len(), 1 + 32);
        assert_eq!(data[0], RegistryInstruction::Initialize as u8);
        assert_eq!(&data[1..], crate::program::core_ds::ID.as_ref());
    }
}
