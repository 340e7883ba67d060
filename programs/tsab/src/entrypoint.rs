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
    instructions::tsab::TsabInstruction,
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

    match TsabInstruction::try_from(*tag)? {
        TsabInstruction::Initialize => process_initialize(accounts, instruction_data),
        TsabInstruction::MintMetadata => process_mint_metadata(accounts, instruction_data),
    }
}
