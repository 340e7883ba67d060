//! Accounts and component payloads of the token-standard action bundle (tsab).

use alloc::{
    collections::BTreeMap,
    string::String,
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
        string_size,
        ProgramAccount,
        ADDRESS_SIZE,
        LEN_PREFIX_SIZE,
        U8_SIZE,
    },
};

pub const TSAB_CONFIG_DISCRIMINANT: u64 = 0xc0de_0002_75ab_0001;

/// A 32-byte sha256 digest of a component name.
pub type ComponentNameHash = [u8; 32];

/// `sha256("metadata")`, the key of the metadata component in [`TsabConfig::components`].
pub const METADATA_COMPONENT_HASH: ComponentNameHash = [
    0x45, 0x44, 0x7b, 0x7a, 0xfb, 0xd5, 0xe5, 0x44, 0xf7, 0xd0, 0xf1, 0xdf, 0x0f, 0xcc, 0xd2, 0x60,
    0x14, 0xd9, 0x85, 0x01, 0x30, 0xab, 0xd3, 0xf0, 0x20, 0xb8, 0x9f, 0xf9, 0x6b, 0x82, 0x07, 0x9f,
];

pub const METADATA_NAME_MAX_LEN: usize = 32;
pub const METADATA_SYMBOL_MAX_LEN: usize = 10;
pub const METADATA_URI_MAX_LEN: usize = 200;

/// The tsab singleton config. Its PDA is also the tsab's CPI signer, so it is the action bundle
/// address registered with the registry.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TsabConfig {
    pub authority: Address,
    /// Component name hash to component schema PDA.
    pub components: BTreeMap<ComponentNameHash, Address>,
}

impl TsabConfig {
    pub const BASE_LEN: usize = ADDRESS_SIZE + LEN_PREFIX_SIZE;
    pub const ENTRY_LEN: usize = core::mem::size_of::<ComponentNameHash>() + ADDRESS_SIZE;

    pub fn metadata_component(&self) -> ArcResult<&Address> {
        self.components
            .get(&METADATA_COMPONENT_HASH)
            .ok_or(ArcError::ComponentNotFound)
    }
}

impl ProgramAccount for TsabConfig {
    const DISCRIMINANT: u64 = TSAB_CONFIG_DISCRIMINANT;

    fn max_size(&self) -> usize {
        Self::BASE_LEN + self.components.len() * Self::ENTRY_LEN
    }
}

/// The payload of the metadata component minted by the tsab.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ComponentMetadata {
    pub update_authority: Address,
    pub mint: Address,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub is_mutable: bool,
}

impl ComponentMetadata {
    pub const MAX_LEN: usize = ADDRESS_SIZE
        + ADDRESS_SIZE
        + string_size(METADATA_NAME_MAX_LEN)
        + string_size(METADATA_SYMBOL_MAX_LEN)
        + string_size(METADATA_URI_MAX_LEN)
        + U8_SIZE;

    pub fn validate(&self) -> ArcResult {
        if self.name.len() > METADATA_NAME_MAX_LEN
            || self.symbol.len() > METADATA_SYMBOL_MAX_LEN
            || self.uri.len() > METADATA_URI_MAX_LEN
        {
            return Err(ArcError::InvalidDataLength);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(name_len: usize, symbol_len: usize, uri_len: usize) -> ComponentMetadata {
        ComponentMetadata {
            update_authority: Address::new_from_array([1; 32]),
            mint: Address::new_from_array([2; 32]),
            name: "n".repeat(name_len),
            symbol: "s".repeat(symbol_len),
            uri: "u".repeat(uri_len),
            is_mutable: true,
        }
    }

    #[test]
    fn max_metadata_fits_exactly() {
        let max = metadata(
            METADATA_NAME_MAX_LEN,
            METADATA_SYMBOL_MAX_LEN,
            METADATA_URI_MAX_LEN,
        );
        assert!(max.validate().is_ok());
        assert_eq!(borsh::to_vec(&max).unwrap().len(), ComponentMetadata::MAX_LEN);
        assert_eq!(ComponentMetadata::MAX_LEN, 319);
    }

    #[test]
    fn oversized_metadata_is_rejected() {
        assert_eq!(
            metadata(METADATA_NAME_MAX_LEN + 1, 0, 0).validate(),
            Err(ArcError::InvalidDataLength)
        );
        assert_eq!(
            metadata(0, 0, METADATA_URI_MAX_LEN + 1).validate(),
            Err(ArcError::InvalidDataLength)
        );
    }

    #[test]
    fn config_size_tracks_components() {
        let mut config = TsabConfig {
            authority: Address::new_from_array([1; 32]),
            components: BTreeMap::new(),
        };
        assert_eq!(config.metadata_component(), Err(ArcError::ComponentNotFound));

        config
            .components
            .insert(METADATA_COMPONENT_HASH, Address::new_from_array([5; 32]));
        assert_eq!(config.max_size(), 36 + 64);
        assert_eq!(borsh::to_vec(&config).unwrap().len(), config.max_size());
        assert_eq!(
            config.metadata_component(),
            Ok(&Address::new_from_array([5; 32]))
        );
    }
}
