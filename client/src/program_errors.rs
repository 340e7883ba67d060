//! Maps failed transactions back to the [`ArcError`] the program returned.

use sol_arc_interface::error::ArcError;
use solana_client::client_error::ClientError;
use solana_sdk::{
    instruction::InstructionError,
    transaction::TransactionError,
};

/// A custom program error raised by one instruction of a failed transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionFailure {
    pub instruction_index: u8,
    pub code: u32,
    /// `None` when the code isn't an [`ArcError`], e.g. it came from the token or system program.
    pub error: Option<ArcError>,
}

impl InstructionFailure {
    pub fn from_transaction_error(error: &TransactionError) -> Option<Self> {
        match error {
            TransactionError::InstructionError(index, InstructionError::Custom(code)) => {
                Some(Self {
                    instruction_index: *index,
                    code: *code,
                    error: arc_error(*code),
                })
            }
            _ => None,
        }
    }

    pub fn from_client_error(error: &ClientError) -> Option<Self> {
        error
            .get_transaction_error()
            .as_ref()
            .and_then(Self::from_transaction_error)
    }
}

impl std::fmt::Display for InstructionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.error {
            Some(error) => write!(
                f,
                "instruction {} failed with {error:?} ({}): {error}",
                self.instruction_index, self.code
            ),
            None => write!(
                f,
                "instruction {} failed with custom error {}",
                self.instruction_index, self.code
            ),
        }
    }
}

pub fn arc_error(code: u32) -> Option<ArcError> {
    u8::try_from(code).ok().and_then(ArcError::from_repr)
}

#[cfg(test)]
mod tests {
    use solana_program_error::ProgramError;

    use super::*;

    #[test]
    fn custom_codes_map_to_arc_errors() {
        let ProgramError::Custom(code) = ProgramError::from(ArcError::ComponentNotFound) else {
            panic!("ArcError should convert to a custom program error");
        };
        assert_eq!(arc_error(code), Some(ArcError::ComponentNotFound));
        assert_eq!(arc_error(u32::from(u8::MAX)), None);
        assert_eq!(arc_error(1 << 16), None);
    }

    #[test]
    fn only_custom_instruction_errors_are_decoded() {
        let failure = InstructionFailure::from_transaction_error(
            &TransactionError::InstructionError(1, InstructionError::Custom(17)),
        )
        .unwrap();
        assert_eq!(failure.instruction_index, 1);
        assert_eq!(failure.error, Some(ArcError::EntityNotEmpty));
        assert!(failure.to_string().contains("EntityNotEmpty"));

        assert_eq!(
            InstructionFailure::from_transaction_error(&TransactionError::InstructionError(
                0,
                InstructionError::MissingRequiredSignature,
            )),
            None
        );
        assert_eq!(
            InstructionFailure::from_transaction_error(&TransactionError::AccountNotFound),
            None
        );
    }
}
