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
    instructions::core_ds::CoreDsInstruction,
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

    match CoreDsInstruction::try_from(*tag)? {
        CoreDsInstruction::InitRegistry => process_init_registry(accounts, instruction_data),
        CoreDsInstruction::InitEntity => process_init_entity(accounts, instruction_data),
        CoreDsInstruction::MintArcNft => process_mint_arcnft(accounts, instruction_data),
        CoreDsInstruction::AddComponents => process_add_components(accounts, instruction_data),
        CoreDsInstruction::RemoveComponents => {
            process_remove_components(accounts, instruction_data)
        }
        CoreDsInstruction::ModifyComponents => {
            process_modify_components(accounts, instruction_data)
        }
        CoreDsInstruction::RemoveEntity => process_remove_entity(accounts, instruction_data),
    }
}
