//! Solana program entrypoint.
//!
//! Forwards incoming instructions from the runtime into the program's core instruction processing
//! logic.

use pinocchio::{
    account::AccountView,
    entrypoint,
    Address,
    ProgramResult,
};
use sol_arc_interface::{
    error::ArcError,
    instructions::registry::RegistryInstruction,
};

use crate::instructions::*;

entrypoint!(process_instruction);

#[inline(never)]
pub fn process_instruction(
    _program_id: &Address,
    accounts: &[AccountView],
    instruction_data_with_tag: &[u8],
) -> ProgramResult {
    let [tag, instruction_data @ ..] = instruction_data_with_tag else {
        return Err(ArcError::InvalidInstructionTag.into());
    };

    match RegistryInstruction::try_from(*tag)? {
        RegistryInstruction::Initialize => process_initialize(accounts, instruction_data),
        RegistryInstruction::InstanceRegistry => {
            process_instance_registry(accounts, instruction_data)
        }
        RegistryInstruction::RegisterComponent => {
            process_register_component(accounts, instruction_data)
        }
        RegistryInstruction::RegisterActionBundle => {
            process_register_action_bundle(accounts, instruction_data)
        }
        RegistryInstruction::AddComponentsToActionBundleRegistration => {
            process_add_components_to_action_bundle_registration(accounts, instruction_data)
        }
        RegistryInstruction::AddInstancesToActionBundleRegistration => {
            process_add_instances_to_action_bundle_registration(accounts, instruction_data)
        }
        RegistryInstruction::InitEntity => process_init_entity(accounts, instruction_data),
        RegistryInstruction::MintArcNft => process_mint_arcnft(accounts, instruction_data),
        RegistryInstruction::ReqAddComponents => {
            process_req_add_components(accounts, instruction_data)
        }
        RegistryInstruction::ReqRemoveComponents => {
            process_req_remove_components(accounts, instruction_data)
        }
        RegistryInstruction::ReqModifyComponents => {
            process_req_modify_components(accounts, instruction_data)
        }
        RegistryInstruction::ReqRemoveEntity => {
            process_req_remove_entity(accounts, instruction_data)
        }
    }
}
