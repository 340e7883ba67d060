//! Registry contexts for building registry instructions from contextual address data.

use std::collections::BTreeMap;

use sol_arc_interface::{
    instructions::registry::{
        client::*,
        AddComponentsToActionBundleRegistrationArgs,
        AddInstancesToActionBundleRegistrationArgs,
        InitEntityArgs,
        InitializeArgs,
        InstanceRegistryArgs,
        MintArcNftArgs,
        RegisterActionBundleArgs,
        RegisterComponentArgs,
        ReqAddComponentsArgs,
        ReqModifyComponentsArgs,
        ReqRemoveComponentsArgs,
        ReqRemoveEntityArgs,
    },
    program,
    seeds::{
        find_action_bundle_registration_address,
        find_arcnft_address,
        find_component_schema_address,
        find_entity_address,
        find_instance_authority_address,
        find_registry_config_address,
        find_registry_instance_address,
    },
    state::{
        core_ds::SerializedComponent,
        SYSTEM_PROGRAM_ID,
    },
};
use solana_address::Address;
use solana_instruction::Instruction;

use crate::context::derived;

/// The registry's singleton accounts and the core data store it writes to.
#[derive(Clone, Debug)]
pub struct RegistryContext {
    pub registry_config: Address,
    pub core_ds: Address,
}

impl RegistryContext {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            registry_config: derived(find_registry_config_address(), "registry config")?,
            core_ds: program::core_ds::ID,
        })
    }

    /// Creates the registry config. Fails on-chain if the registry was already initialized.
    pub fn initialize(&self, payer: Address) -> anyhow::Result<Instruction> {
        Ok(Initialize {
            payer,
            system_program: SYSTEM_PROGRAM_ID,
            registry_config: self.registry_config,
        }
        .create_instruction(&InitializeArgs {
            core_ds: self.core_ds,
        })?)
    }

    /// Returns the instance's context with the instruction that creates it. The payer becomes the
    /// instance authority.
    pub fn instance_registry(
        &self,
        payer: Address,
        instance: u64,
    ) -> anyhow::Result<(InstanceContext, Instruction)> {
        let ctx = InstanceContext::new(self.clone(), instance)?;
        let instruction = InstanceRegistry {
            payer,
            system_program: SYSTEM_PROGRAM_ID,
            registry_config: self.registry_config,
            registry_instance: ctx.registry_instance,
            instance_authority: ctx.instance_authority,
            core_ds_program: self.core_ds,
        }
        .create_instruction(&InstanceRegistryArgs { instance })?;

        Ok((ctx, instruction))
    }

    /// Returns the component schema's address with the instruction that registers it.
    pub fn register_component(
        &self,
        payer: Address,
        schema: &str,
    ) -> anyhow::Result<(Address, Instruction)> {
        let component = derived(find_component_schema_address(schema), "component schema")?;
        let instruction = RegisterComponent {
            payer,
            system_program: SYSTEM_PROGRAM_ID,
            component,
            registry_config: self.registry_config,
        }
        .create_instruction(&RegisterComponentArgs {
            schema: schema.to_string(),
        })?;

        Ok((component, instruction))
    }
}

/// One instance of the registry in the core data store.
#[derive(Clone, Debug)]
pub struct InstanceContext {
    pub registry: RegistryContext,
    pub instance: u64,
    pub registry_instance: Address,
    pub instance_authority: Address,
}

impl InstanceContext {
    pub fn new(registry: RegistryContext, instance: u64) -> anyhow::Result<Self> {
        let registry_instance = derived(
            find_registry_instance_address(&program::registry::ID, instance),
            "registry instance",
        )?;
        let instance_authority = derived(
            find_instance_authority_address(&registry_instance),
            "instance authority",
        )?;

        Ok(Self {
            registry,
            instance,
            registry_instance,
            instance_authority,
        })
    }

    pub fn entity_address(&self, entity_id: u64) -> anyhow::Result<Address> {
        derived(find_entity_address(entity_id, &self.registry_instance), "entity")
    }

    /// The context of `action_bundle` as registered on this instance.
    pub fn action_bundle(&self, action_bundle: Address) -> anyhow::Result<ActionBundleContext> {
        let registration = derived(
            find_action_bundle_registration_address(&self.registry_instance, &action_bundle),
            "action bundle registration",
        )?;

        Ok(ActionBundleContext {
            registry: self.registry.clone(),
            action_bundle,
            registration,
        })
    }

    /// Registers `action_bundle` on this instance. `authority` must be the instance authority and
    /// sign the transaction.
    pub fn register_action_bundle(
        &self,
        payer: Address,
        authority: Address,
        action_bundle: Address,
    ) -> anyhow::Result<Instruction> {
        Ok(RegisterActionBundle {
            payer,
            system_program: SYSTEM_PROGRAM_ID,
            registry_config: self.registry.registry_config,
            registry_instance: self.registry_instance,
            instance_authority: self.instance_authority,
            authority,
            action_bundle_registration: self.action_bundle(action_bundle)?.registration,
            action_bundle,
        }
        .create_instruction(&RegisterActionBundleArgs)?)
    }

    pub fn add_components_to_registration(
        &self,
        payer: Address,
        authority: Address,
        action_bundle: Address,
        components: Vec<Address>,
    ) -> anyhow::Result<Instruction> {
        Ok(AddComponentsToActionBundleRegistration {
            payer,
            system_program: SYSTEM_PROGRAM_ID,
            registry_config: self.registry.registry_config,
            registry_instance: self.registry_instance,
            instance_authority: self.instance_authority,
            authority,
            action_bundle_registration: self.action_bundle(action_bundle)?.registration,
            action_bundle,
        }
        .create_instruction(&AddComponentsToActionBundleRegistrationArgs { components })?)
    }

    pub fn add_instances_to_registration(
        &self,
        payer: Address,
        authority: Address,
        action_bundle: Address,
        instances: Vec<u64>,
    ) -> anyhow::Result<Instruction> {
        Ok(AddInstancesToActionBundleRegistration {
            payer,
            system_program: SYSTEM_PROGRAM_ID,
            registry_config: self.registry.registry_config,
            registry_instance: self.registry_instance,
            instance_authority: self.instance_authority,
            authority,
            action_bundle_registration: self.action_bundle(action_bundle)?.registration,
            action_bundle,
        }
        .create_instruction(&AddInstancesToActionBundleRegistrationArgs { instances })?)
    }
}

/// An action bundle and the registration it was created with. Every entity request built here must
/// be signed by the action bundle.
#[derive(Clone, Debug)]
pub struct ActionBundleContext {
    pub registry: RegistryContext,
    pub action_bundle: Address,
    pub registration: Address,
}

impl ActionBundleContext {
    /// Returns the new entity's address with the instruction that creates it in `instance`.
    pub fn init_entity(
        &self,
        payer: Address,
        instance: &InstanceContext,
        entity_id: u64,
        components: BTreeMap<Address, SerializedComponent>,
    ) -> anyhow::Result<(Address, Instruction)> {
        let entity = instance.entity_address(entity_id)?;
        let instruction = InitEntity {
            payer,
            system_program: SYSTEM_PROGRAM_ID,
            registry_config: self.registry.registry_config,
            entity,
            registry_instance: instance.registry_instance,
            action_bundle: self.action_bundle,
            action_bundle_registration: self.registration,
            core_ds_program: self.registry.core_ds,
        }
        .create_instruction(&InitEntityArgs {
            entity_id,
            components,
        })?;

        Ok((entity, instruction))
    }

    /// Returns the ARC-NFT's address with the instruction that binds `mint` to `entity`.
    pub fn mint_arcnft(
        &self,
        payer: Address,
        instance: &InstanceContext,
        entity: Address,
        mint: Address,
    ) -> anyhow::Result<(Address, Instruction)> {
        let arcnft = derived(find_arcnft_address(&mint, &entity), "ARC-NFT")?;
        let instruction = MintArcNft {
            payer,
            system_program: SYSTEM_PROGRAM_ID,
            registry_config: self.registry.registry_config,
            entity,
            mint,
            arcnft,
            registry_instance: instance.registry_instance,
            action_bundle: self.action_bundle,
            action_bundle_registration: self.registration,
            core_ds_program: self.registry.core_ds,
        }
        .create_instruction(&MintArcNftArgs)?;

        Ok((arcnft, instruction))
    }

    pub fn req_add_components(
        &self,
        payer: Address,
        entity: Address,
        components: Vec<(Address, SerializedComponent)>,
    ) -> anyhow::Result<Instruction> {
        Ok(ReqAddComponents {
            payer,
            system_program: SYSTEM_PROGRAM_ID,
            registry_config: self.registry.registry_config,
            entity,
            action_bundle: self.action_bundle,
            action_bundle_registration: self.registration,
            core_ds_program: self.registry.core_ds,
        }
        .create_instruction(&ReqAddComponentsArgs { components })?)
    }

    pub fn req_remove_components(
        &self,
        benefactor: Address,
        entity: Address,
        components: Vec<Address>,
    ) -> anyhow::Result<Instruction> {
        Ok(ReqRemoveComponents {
            benefactor,
            system_program: SYSTEM_PROGRAM_ID,
            registry_config: self.registry.registry_config,
            entity,
            action_bundle: self.action_bundle,
            action_bundle_registration: self.registration,
            core_ds_program: self.registry.core_ds,
        }
        .create_instruction(&ReqRemoveComponentsArgs { components })?)
    }

    pub fn req_modify_components(
        &self,
        entity: Address,
        components: Vec<(Address, Vec<u8>)>,
    ) -> anyhow::Result<Instruction> {
        Ok(ReqModifyComponents {
            registry_config: self.registry.registry_config,
            entity,
            action_bundle: self.action_bundle,
            action_bundle_registration: self.registration,
            core_ds_program: self.registry.core_ds,
        }
        .create_instruction(&ReqModifyComponentsArgs { components })?)
    }

    pub fn req_remove_entity(
        &self,
        benefactor: Address,
        entity: Address,
    ) -> anyhow::Result<Instruction> {
        Ok(ReqRemoveEntity {
            benefactor,
            system_program: SYSTEM_PROGRAM_ID,
            registry_config: self.registry.registry_config,
            entity,
            action_bundle: self.action_bundle,
            action_bundle_registration: self.registration,
            core_ds_program: self.registry.core_ds,
        }
        .create_instruction(&ReqRemoveEntityArgs)?)
    }
}

#[cfg(test)]
mod tests {
    use sol_arc_interface::instructions::registry::RegistryInstruction;

    use super::*;

    #[test]
    fn initialize_targets_the_registry_config() {
        let registry = RegistryContext::new().unwrap();
        let payer = Address::new_unique();
        let ix = registry.initialize(payer).unwrap();

        assert_eq!(ix.program_id, program::registry::ID);
        assert_eq!(ix.data[0], RegistryInstruction::Initialize as u8);
        assert_eq!(&ix.data[1..], program::core_ds::ID.as_ref());

        let keys = ix.accounts.iter().map(|meta| meta.pubkey).collect::<Vec<_>>();
        assert_eq!(keys, vec![payer, SYSTEM_PROGRAM_ID, registry.registry_config]);
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert!(!ix.accounts[1].is_writable);
        assert!(ix.accounts[2].is_writable && !ix.accounts[2].is_signer);
    }

    #[test]
    fn entity_requests_require_the_action_bundle_signature() {
        let (instance, _) = RegistryContext::new()
            .unwrap()
            .instance_registry(Address::new_unique(), 0)
            .unwrap();
        let bundle = instance.action_bundle(Address::new_unique()).unwrap();
        let entity = instance.entity_address(1).unwrap();

        let ix = bundle.req_modify_components(entity, vec![]).unwrap();
        let signer = ix
            .accounts
            .iter()
            .find(|meta| meta.pubkey == bundle.action_bundle)
            .unwrap();
        assert!(signer.is_signer && !signer.is_writable);
        assert_eq!(ix.data, vec![RegistryInstruction::ReqModifyComponents as u8, 0, 0, 0, 0]);
    }
}
