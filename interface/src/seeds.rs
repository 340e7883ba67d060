//! PDA seed prefixes and address derivations for every program-owned account.
//!
//! Each `find_*` function returns the address and its bump. Integers in seeds are big-endian.

use solana_address::Address;

use crate::program;

pub const REGISTRY_INSTANCE_SEED: &[u8] = b"registry_instance";
pub const ENTITY_SEED: &[u8] = b"entity";
pub const ARCNFT_SEED: &[u8] = b"arcnft";
/// The registry config PDA. It doubles as the registry's CPI signer.
pub const REGISTRY_SIGNER_SEED: &[u8] = b"registry_signer";
pub const INSTANCE_AUTHORITY_SEED: &[u8] = b"instance_authority";
pub const ACTION_BUNDLE_REGISTRATION_SEED: &[u8] = b"action_bundle_registration";
/// The tsab config PDA. It doubles as the tsab action bundle's CPI signer.
pub const TSAB_SIGNER_SEED: &[u8] = b"tsab_signer";

#[inline(always)]
fn find(seeds: &[&[u8]], program_id: &Address) -> Option<(Address, u8)> {
    Address::try_find_program_address(seeds, program_id)
}

pub fn find_registry_instance_address(registry: &Address, instance: u64) -> Option<(Address, u8)> {
    find(
        &[
            REGISTRY_INSTANCE_SEED,
            registry.as_ref(),
            &instance.to_be_bytes(),
        ],
        &program::core_ds::ID,
    )
}

pub fn find_entity_address(entity_id: u64, registry_instance: &Address) -> Option<(Address, u8)> {
    find(
        &[
            ENTITY_SEED,
            &entity_id.to_be_bytes(),
            registry_instance.as_ref(),
        ],
        &program::core_ds::ID,
    )
}

pub fn find_arcnft_address(mint: &Address, entity: &Address) -> Option<(Address, u8)> {
    find(
        &[ARCNFT_SEED, mint.as_ref(), entity.as_ref()],
        &program::core_ds::ID,
    )
}

/// The signer PDA of an arbitrary registry program. core-ds uses this to check that a mutation
/// was requested by the registry owning the instance or entity.
pub fn find_registry_signer_address(registry_program: &Address) -> Option<(Address, u8)> {
    find(&[REGISTRY_SIGNER_SEED], registry_program)
}

pub fn find_registry_config_address() -> Option<(Address, u8)> {
    find_registry_signer_address(&program::registry::ID)
}

pub fn find_instance_authority_address(registry_instance: &Address) -> Option<(Address, u8)> {
    find(
        &[INSTANCE_AUTHORITY_SEED, registry_instance.as_ref()],
        &program::registry::ID,
    )
}

/// Component schemas are keyed by the raw bytes of their schema string, so a schema can be at
/// most 32 bytes long.
pub fn find_component_schema_address(schema: &str) -> Option<(Address, u8)> {
    find(&[schema.as_bytes()], &program::registry::ID)
}

pub fn find_action_bundle_registration_address(
    registry_instance: &Address,
    action_bundle: &Address,
) -> Option<(Address, u8)> {
    find(
        &[
            ACTION_BUNDLE_REGISTRATION_SEED,
            registry_instance.as_ref(),
            action_bundle.as_ref(),
        ],
        &program::registry::ID,
    )
}

pub fn find_tsab_config_address() -> Option<(Address, u8)> {
    find(&[TSAB_SIGNER_SEED], &program::tsab::ID)
}

#[cfg(all(test, not(target_os = "solana")))]
mod tests {
    use super::*;

    #[test]
    fn derivations_are_deterministic_and_distinct() {
        let registry_instance = find_registry_instance_address(&program::registry::ID, 0)
            .unwrap()
            .0;
        assert_eq!(
            find_registry_instance_address(&program::registry::ID, 0),
            find_registry_instance_address(&program::registry::ID, 0),
        );
        assert_ne!(
            find_registry_instance_address(&program::registry::ID, 0),
            find_registry_instance_address(&program::registry::ID, 1),
        );
        assert_ne!(
            find_entity_address(1, &registry_instance),
            find_entity_address(2, &registry_instance),
        );
        assert_eq!(
            find_registry_config_address(),
            find_registry_signer_address(&program::registry::ID),
        );
    }
}
