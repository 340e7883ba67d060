//! Common error types and conversion helpers to represent them as error message strings.

use solana_program_error::ProgramError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "client", derive(strum_macros::FromRepr))]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[repr(u8)]
pub enum ArcError {
    InvalidInstructionTag,
    InvalidInstructionData,
    IncorrectNumAccounts,
    InvalidAccountDiscriminant,
    InvalidAccountData,
    InvalidAccountOwner,
    AccountNotInitialized,
    AlreadyInitializedAccount,
    InsufficientAccountSpace,
    AddressDerivationFailed,
    IncorrectAddress,
    MissingRequiredSignature,
    AccountNotWritable,
    IncorrectProgramId,
    InvalidRegistrySigner,
    InvalidDataLength,
    ComponentNotFound,
    EntityNotEmpty,
    InvalidMintAccount,
    InstanceMismatch,
    InstanceNotRegistered,
    ComponentNotPermitted,
    MintNotPermitted,
    ActionBundleMismatch,
    InvalidInstanceAuthority,
    ArithmeticOverflow,
}

impl From<ArcError> for ProgramError {
    #[inline(always)]
    fn from(e: ArcError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<ArcError> for &'static str {
    fn from(value: ArcError) -> Self {
        match value {
            ArcError::InvalidInstructionTag => "Invalid instruction tag",
            ArcError::InvalidInstructionData => "Instruction data is invalid",
            ArcError::IncorrectNumAccounts => "Incorrect number of accounts passed",
            ArcError::InvalidAccountDiscriminant => "Invalid account discriminant",
            ArcError::InvalidAccountData => "Account data couldn't be decoded",
            ArcError::InvalidAccountOwner => "Account isn't owned by the expected program",
            ArcError::AccountNotInitialized => "Account hasn't been initialized",
            ArcError::AlreadyInitializedAccount => "Account has already been initialized",
            ArcError::InsufficientAccountSpace => "Account data is too small for its state",
            ArcError::AddressDerivationFailed => "PDA derivation failed",
            ArcError::IncorrectAddress => "Account address doesn't match its derivation",
            ArcError::MissingRequiredSignature => "A required signature is missing",
            ArcError::AccountNotWritable => "Account must be writable",
            ArcError::IncorrectProgramId => "Incorrect program id passed",
            ArcError::InvalidRegistrySigner => "The registry signer isn't the owning registry's",
            ArcError::InvalidDataLength => "Component data exceeds its max size",
            ArcError::ComponentNotFound => "Component not found",
            ArcError::EntityNotEmpty => "Only entities without components can be removed",
            ArcError::InvalidMintAccount => "Invalid mint account",
            ArcError::InstanceMismatch => "Instance authority doesn't belong to the instance",
            ArcError::InstanceNotRegistered => "Action bundle isn't registered for the instance",
            ArcError::ComponentNotPermitted => "Action bundle isn't permitted for a component",
            ArcError::MintNotPermitted => "Action bundle isn't permitted to mint",
            ArcError::ActionBundleMismatch => "Registration belongs to a different action bundle",
            ArcError::InvalidInstanceAuthority => "The instance authority didn't sign",
            ArcError::ArithmeticOverflow => "Arithmetic overflow",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for ArcError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let message: &'static str = (*self).into();
        write!(f, "{message}")
    }
}

#[cfg(all(feature = "std", not(target_os = "solana")))]
impl std::error::Error for ArcError {}

pub type ArcResult<T = ()> = Result<T, ArcError>;

#[cfg(test)]
mod tests {
    use solana_program_error::ProgramError;
    use strum::IntoEnumIterator;

    use super::ArcError;

    #[test]
    fn error_codes_are_stable_and_distinct() {
        for (i, error) in ArcError::iter().enumerate() {
            assert_eq!(ProgramError::from(error), ProgramError::Custom(i as u32));
        }
        assert_eq!(
            ProgramError::from(ArcError::InvalidDataLength),
            ProgramError::Custom(15)
        );
    }

    #[test]
    fn every_error_has_a_message() {
        for error in ArcError::iter() {
            let message: &'static str = error.into();
            assert!(!message.is_empty());
        }
    }
}
