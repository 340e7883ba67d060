//! Accounts owned by the registry program.

use alloc::{
    collections::BTreeSet,
    string::String,
};

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_address::Address;

use crate::state::{
    string_size,
    ProgramAccount,
    ADDRESS_SIZE,
    LEN_PREFIX_SIZE,
    U64_SIZE,
    U8_SIZE,
};

pub const REGISTRY_CONFIG_DISCRIMINANT: u64 = 0xc0de_0001_c0f6_0001;
pub const INSTANCE_AUTHORITY_DISCRIMINANT: u64 = 0xc0de_0001_a074_0002;
pub const COMPONENT_SCHEMA_DISCRIMINANT: u64 = 0xc0de_0001_5c4e_0003;
pub const ACTION_BUNDLE_REGISTRATION_DISCRIMINANT: u64 = 0xc0de_0001_ab12_0004;

/// Schemas double as the seed of their PDA, which caps them at the max seed length.
pub const MAX_SCHEMA_LEN: usize = 32;
/// Space reserved for a component schema's URL.
pub const STRING_MAX_SIZE: usize = string_size(196);

/// The registry's singleton config. Its PDA is also the registry's CPI signer.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    pub core_ds: Address,
    /// The number of registered component schemas.
    pub components: u64,
}

impl RegistryConfig {
    pub const LEN: usize = ADDRESS_SIZE + U64_SIZE;
}

static_assertions::const_assert_eq!(STRING_MAX_SIZE, 200);
static_assertions::const_assert!(MAX_SCHEMA_LEN <= ADDRESS_SIZE);

impl ProgramAccount for RegistryConfig {
    const DISCRIMINANT: u64 = REGISTRY_CONFIG_DISCRIMINANT;

    fn max_size(&self) -> usize {
        Self::LEN
    }
}

/// The authority allowed to register action bundles on one registry instance.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InstanceAuthority {
    pub instance: u64,
    pub authority: Address,
}

impl InstanceAuthority {
    pub const LEN: usize = U64_SIZE + ADDRESS_SIZE;
}

impl ProgramAccount for InstanceAuthority {
    const DISCRIMINANT: u64 = INSTANCE_AUTHORITY_DISCRIMINANT;

    fn max_size(&self) -> usize {
        Self::LEN
    }
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ComponentSchema {
    pub url: String,
}

impl ProgramAccount for ComponentSchema {
    const DISCRIMINANT: u64 = COMPONENT_SCHEMA_DISCRIMINANT;

    fn max_size(&self) -> usize {
        STRING_MAX_SIZE
    }
}

/// What an action bundle may do: which instances it may touch, which components it may write and
/// whether it may mint ARC-NFTs.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ActionBundleRegistration {
    pub action_bundle: Address,
    pub instances: BTreeSet<u64>,
    pub can_mint: bool,
    /// Component schema PDAs.
    pub components: BTreeSet<Address>,
}

impl ActionBundleRegistration {
    pub const BASE_LEN: usize = ADDRESS_SIZE + LEN_PREFIX_SIZE + U8_SIZE + LEN_PREFIX_SIZE;

    /// Whether the action bundle may write every one of `components`.
    pub fn permits_all<'a>(&self, mut components: impl Iterator<Item = &'a Address>) -> bool {
        components.all(|component| self.components.contains(component))
    }
}

impl ProgramAccount for ActionBundleRegistration {
    const DISCRIMINANT: u64 = ACTION_BUNDLE_REGISTRATION_DISCRIMINANT;

    fn max_size(&self) -> usize {
        Self::BASE_LEN + self.instances.len() * U64_SIZE + self.components.len() * ADDRESS_SIZE
    }
}
