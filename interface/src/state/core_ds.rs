//! Accounts owned by the core data store: registry instances, entities and their ARC-NFTs.

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
    error::{
        ArcError,
        ArcResult,
    },
    state::{
        ProgramAccount,
        ADDRESS_SIZE,
        LEN_PREFIX_SIZE,
        U64_SIZE,
    },
};

pub const REGISTRY_INSTANCE_DISCRIMINANT: u64 = 0xc0de_0000_1257_0001;
pub const ENTITY_DISCRIMINANT: u64 = 0xc0de_0000_e471_0002;
pub const ARCNFT_DISCRIMINANT: u64 = 0xc0de_0000_a2cf_0003;

/// The largest `max_size` a single component may declare. This is the runtime's per-instruction
/// account growth limit.
pub const MAX_COMPONENT_SIZE: u64 = 10_240;

/// Space an entry of [`Entity::components`] takes in addition to its data: the component key, the
/// `max_size` field and the data length prefix.
pub const SERIALIZED_COMPONENT_EXTRA_SPACE: usize = ADDRESS_SIZE + U64_SIZE + LEN_PREFIX_SIZE;

/// A component value as stored on an entity. `data` is opaque to the data store; its schema is
/// described by the component's registered schema URL.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SerializedComponent {
    /// The number of bytes reserved for `data`. Fixed when the component is added.
    pub max_size: u64,
    pub data: Vec<u8>,
}

impl SerializedComponent {
    pub fn new(max_size: u64, data: Vec<u8>) -> Self {
        Self { max_size, data }
    }

    /// Checks the component fits in the space it reserves.
    pub fn validate(&self) -> ArcResult {
        if self.max_size > MAX_COMPONENT_SIZE || self.data.len() as u64 > self.max_size {
            return Err(ArcError::InvalidDataLength);
        }
        Ok(())
    }

    /// The space this component occupies as an entry of [`Entity::components`].
    #[inline(always)]
    pub fn entry_size(&self) -> usize {
        self.max_size as usize + SERIALIZED_COMPONENT_EXTRA_SPACE
    }
}

/// One instance of a registry. Entities are always created inside an instance.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RegistryInstance {
    /// The registry program that owns this instance.
    pub registry: Address,
    pub instance: u64,
    /// The number of entities ever created in this instance.
    pub entities: u64,
}

impl RegistryInstance {
    pub const LEN: usize = ADDRESS_SIZE + U64_SIZE + U64_SIZE;
}

static_assertions::const_assert_eq!(SERIALIZED_COMPONENT_EXTRA_SPACE, 44);
static_assertions::const_assert_eq!(RegistryInstance::LEN, 48);

impl ProgramAccount for RegistryInstance {
    const DISCRIMINANT: u64 = REGISTRY_INSTANCE_DISCRIMINANT;

    fn max_size(&self) -> usize {
        Self::LEN
    }
}

/// An entity: a bag of components keyed by the component schema's address.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub entity_id: u64,
    pub instance: u64,
    pub registry: Address,
    pub components: BTreeMap<Address, SerializedComponent>,
}

impl Entity {
    /// The size of an entity without any components.
    pub const BASE_LEN: usize = U64_SIZE + U64_SIZE + ADDRESS_SIZE + LEN_PREFIX_SIZE;
}

impl ProgramAccount for Entity {
    const DISCRIMINANT: u64 = ENTITY_DISCRIMINANT;

    fn max_size(&self) -> usize {
        Self::BASE_LEN
            + self
                .components
                .values()
                .map(SerializedComponent::entry_size)
                .sum::<usize>()
    }
}

/// Binds an SPL mint to an entity.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ArcNft {
    pub entity: Address,
    pub mint: Address,
}

impl ArcNft {
    pub const LEN: usize = ADDRESS_SIZE + ADDRESS_SIZE;
}

impl ProgramAccount for ArcNft {
    const DISCRIMINANT: u64 = ARCNFT_DISCRIMINANT;

    fn max_size(&self) -> usize {
        Self::LEN
    }
}
