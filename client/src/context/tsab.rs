//! Context for building instructions of the token-standard action bundle (tsab).

use std::collections::BTreeMap;

use sha2::{
    Digest,
    Sha256,
};
use sol_arc_interface::{
    instructions::tsab::{
        client::{
            Initialize,
            MintMetadata,
        },
        InitializeArgs,
        MintMetadataArgs,
    },
    program,
    seeds::{
        find_arcnft_address,
        find_tsab_config_address,
    },
    state::{
        tsab::{
            ComponentMetadata,
            ComponentNameHash,
        },
        SYSTEM_PROGRAM_ID,
    },
};
use solana_address::Address;
use solana_instruction::Instruction;

use crate::context::{
    derived,
    registry::{
        ActionBundleContext,
        InstanceContext,
    },
};

/// The key a component schema is stored under in the tsab config: the sha256 of its name.
pub fn component_key(name: &str) -> ComponentNameHash {
    Sha256::digest(name.as_bytes()).into()
}

#[derive(Clone, Debug)]
pub struct TsabContext {
    /// The tsab config PDA, which is also the action bundle address the registry knows the tsab
    /// by.
    pub tsab_config: Address,
}

impl TsabContext {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            tsab_config: derived(find_tsab_config_address(), "tsab config")?,
        })
    }

    /// The tsab's registration on `instance`.
    pub fn action_bundle(&self, instance: &InstanceContext) -> anyhow::Result<ActionBundleContext> {
        instance.action_bundle(self.tsab_config)
    }

    /// Creates the tsab config. `components` maps [`component_key`]s to component schema PDAs.
    pub fn initialize(
        &self,
        payer: Address,
        components: BTreeMap<ComponentNameHash, Address>,
    ) -> anyhow::Result<Instruction> {
        Ok(Initialize {
            payer,
            system_program: SYSTEM_PROGRAM_ID,
            tsab_config: self.tsab_config,
        }
        .create_instruction(&InitializeArgs { components })?)
    }

    /// Returns the new entity and ARC-NFT addresses with the instruction that mints `metadata` as
    /// an entity of `instance`, bound to `metadata.mint`.
    pub fn mint_metadata(
        &self,
        payer: Address,
        instance: &InstanceContext,
        entity_id: u64,
        metadata: ComponentMetadata,
    ) -> anyhow::Result<(Address, Address, Instruction)> {
        let entity = instance.entity_address(entity_id)?;
        let arcnft = derived(find_arcnft_address(&metadata.mint, &entity), "ARC-NFT")?;
        let registration = self.action_bundle(instance)?.registration;

        let instruction = MintMetadata {
            payer,
            system_program: SYSTEM_PROGRAM_ID,
            mint: metadata.mint,
            tsab_config: self.tsab_config,
            entity,
            arcnft,
            registry_config: instance.registry.registry_config,
            registry_program: program::registry::ID,
            tsab_registration: registration,
            core_ds_program: instance.registry.core_ds,
            registry_instance: instance.registry_instance,
        }
        .create_instruction(&MintMetadataArgs {
            entity_id,
            metadata,
        })?;

        Ok((entity, arcnft, instruction))
    }
}

#[cfg(test)]
mod tests {
    use sol_arc_interface::state::tsab::METADATA_COMPONENT_HASH;

    use super::*;

    #[test]
    fn metadata_component_key_matches_the_on_chain_constant() {
        assert_eq!(component_key("metadata"), METADATA_COMPONENT_HASH);
        assert_ne!(component_key("Metadata"), METADATA_COMPONENT_HASH);
    }
}
