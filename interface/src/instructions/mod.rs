//! Instruction schemas for the three ARC programs.
//!
//! Instruction data is a one byte tag followed by the borsh encoding of the instruction's args.
//! Every instruction also has an ordered account list, declared once with
//! [`instruction_accounts!`] and rendered in two forms:
//!
//! - `accounts::*`: structs of `&AccountView`s with a fallible loader and `invoke_signed` for CPIs.
//! - `client::*` (the `client` feature): structs of `Address`es that build a `solana_instruction`.

use alloc::vec::Vec;

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};

use crate::error::{
    ArcError,
    ArcResult,
};

/// Borsh-encoded instruction args tagged with their instruction's discriminant.
pub trait InstructionArgs: BorshSerialize + BorshDeserialize {
    const TAG: u8;

    /// Packs the tag and the args into instruction data.
    fn pack(&self) -> ArcResult<Vec<u8>> {
        let mut data = Vec::with_capacity(1 + core::mem::size_of_val(self));
        data.push(Self::TAG);
        self.serialize(&mut data)
            .map_err(|_| ArcError::InvalidInstructionData)?;
        Ok(data)
    }

    /// Unpacks args from instruction data that has already had its tag stripped. Trailing bytes
    /// are rejected.
    fn unpack(untagged: &[u8]) -> ArcResult<Self> {
        borsh::from_slice(untagged).map_err(|_| ArcError::InvalidInstructionData)
    }
}

/// Client-side `AccountMeta` constructors named after the matching `InstructionAccount`
/// constructors, so both renderings of an account list share one access kind per account.
#[cfg(feature = "client")]
pub mod meta {
    use solana_address::Address;
    use solana_instruction::AccountMeta;

    #[inline(always)]
    pub fn writable_signer(address: Address) -> AccountMeta {
        AccountMeta::new(address, true)
    }

    #[inline(always)]
    pub fn writable(address: Address) -> AccountMeta {
        AccountMeta::new(address, false)
    }

    #[inline(always)]
    pub fn readonly_signer(address: Address) -> AccountMeta {
        AccountMeta::new_readonly(address, true)
    }

    #[inline(always)]
    pub fn readonly(address: Address) -> AccountMeta {
        AccountMeta::new_readonly(address, false)
    }
}

/// Declares the ordered account lists of a program's instructions.
///
/// Each account is `name: kind`, where `kind` is one of `writable_signer`, `writable`,
/// `readonly_signer` or `readonly`.
macro_rules! instruction_accounts {
    (
        program_id: $program_id:path;
        $(
            $(#[$meta:meta])*
            $name:ident($args:ty) {
                $( $field:ident: $kind:ident ),+ $(,)?
            }
        )+
    ) => {
        pub mod accounts {
            use solana_account_view::AccountView;
            use solana_instruction_view::{
                cpi::{
                    invoke_signed,
                    Signer,
                },
                InstructionAccount,
                InstructionView,
            };
            use solana_program_error::ProgramResult;

            use crate::{
                error::ArcError,
                instructions::InstructionArgs,
            };

            $(
                $(#[$meta])*
                pub struct $name<'a> {
                    $( pub $field: &'a AccountView, )+
                }

                impl<'a> $name<'a> {
                    #[inline(always)]
                    pub fn load_accounts(accounts: &'a [AccountView]) -> Result<Self, ArcError> {
                        let [ $( $field ),+ ] = accounts else {
                            return Err(ArcError::IncorrectNumAccounts);
                        };

                        Ok(Self { $( $field ),+ })
                    }

                    #[inline(always)]
                    pub fn invoke_signed(
                        &self,
                        signers_seeds: &[Signer],
                        args: &$args,
                    ) -> ProgramResult {
                        let data = args.pack()?;
                        invoke_signed(
                            &InstructionView {
                                program_id: &$program_id,
                                accounts: &[
                                    $( InstructionAccount::$kind(self.$field.address()) ),+
                                ],
                                data: &data,
                            },
                            &[ $( self.$field ),+ ],
                            signers_seeds,
                        )
                    }
                }
            )+
        }

        #[cfg(feature = "client")]
        pub mod client {
            use solana_address::Address;
            use solana_instruction::Instruction;

            use crate::{
                error::ArcResult,
                instructions::{
                    meta,
                    InstructionArgs,
                },
            };

            $(
                $(#[$meta])*
                #[derive(Clone, Debug)]
                pub struct $name {
                    $( pub $field: Address, )+
                }

                impl $name {
                    pub fn create_instruction(&self, args: &$args) -> ArcResult<Instruction> {
                        Ok(Instruction {
                            program_id: $program_id,
                            accounts: alloc::vec![ $( meta::$kind(self.$field) ),+ ],
                            data: args.pack()?,
                        })
                    }
                }
            )+
        }
    };
}

pub mod core_ds;
pub mod registry;
pub mod tsab;
