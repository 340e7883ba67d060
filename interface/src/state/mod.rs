//! On-chain account state for the ARC programs.
//!
//! Every program-owned account stores a u64 discriminant as LE bytes followed by the borsh
//! encoding of its state. Accounts are allocated for the *maximum* encoded size of their current
//! contents, so the encoding may be followed by zeroed, unused bytes.

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_address::Address;

use crate::error::{
    ArcError,
    ArcResult,
};

pub mod core_ds;
pub mod registry;
pub mod tsab;

pub const U8_SIZE: usize = core::mem::size_of::<u8>();
pub const U64_SIZE: usize = core::mem::size_of::<u64>();
pub const ADDRESS_SIZE: usize = core::mem::size_of::<Address>();
/// The borsh length prefix of a `Vec`, `String`, `BTreeMap` or `BTreeSet`.
pub const LEN_PREFIX_SIZE: usize = core::mem::size_of::<u32>();
pub const DISCRIMINANT_SIZE: usize = U64_SIZE;

pub const SYSTEM_PROGRAM_ID: Address = Address::new_from_array([0; 32]);

/// Borsh-encoded state owned by one of the ARC programs.
pub trait ProgramAccount: BorshSerialize + BorshDeserialize {
    const DISCRIMINANT: u64;

    /// The maximum borsh-encoded size of `self`, excluding the discriminant.
    fn max_size(&self) -> usize;

    /// The account data length required to store `self`.
    #[inline(always)]
    fn account_len(&self) -> usize {
        DISCRIMINANT_SIZE + self.max_size()
    }

    /// Decodes the state from raw account data, checking the discriminant first.
    fn unpack(data: &[u8]) -> ArcResult<Self> {
        let Some((discriminant, mut rest)) = data.split_first_chunk::<DISCRIMINANT_SIZE>() else {
            return Err(ArcError::AccountNotInitialized);
        };
        let discriminant = u64::from_le_bytes(*discriminant);
        if discriminant == 0 {
            return Err(ArcError::AccountNotInitialized);
        }
        if discriminant != Self::DISCRIMINANT {
            return Err(ArcError::InvalidAccountDiscriminant);
        }

        Self::deserialize(&mut rest).map_err(|_| ArcError::InvalidAccountData)
    }

    /// Writes the discriminant and the encoded state to `data`, zeroing any trailing bytes.
    fn pack_into(&self, data: &mut [u8]) -> ArcResult {
        let encoded = borsh::to_vec(self).map_err(|_| ArcError::InvalidAccountData)?;
        let end = DISCRIMINANT_SIZE + encoded.len();
        if data.len() < end {
            return Err(ArcError::InsufficientAccountSpace);
        }

        data[..DISCRIMINANT_SIZE].copy_from_slice(&Self::DISCRIMINANT.to_le_bytes());
        data[DISCRIMINANT_SIZE..end].copy_from_slice(&encoded);
        data[end..].fill(0);
        Ok(())
    }
}

/// Returns the max encoded size of a borsh string holding at most `max_bytes` bytes.
#[inline(always)]
pub const fn string_size(max_bytes: usize) -> usize {
    LEN_PREFIX_SIZE + max_bytes
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{
        core_ds::RegistryInstance,
        *,
    };

    #[test]
    fn pack_then_unpack_with_trailing_space() {
        let instance = RegistryInstance {
            registry: Address::new_from_array([7; 32]),
            instance: 3,
            entities: 9,
        };
        let mut data = vec![0xff; instance.account_len() + 16];
        instance.pack_into(&mut data).unwrap();

        assert!(data[instance.account_len()..].iter().all(|b| *b == 0));
        assert_eq!(RegistryInstance::unpack(&data).unwrap(), instance);
    }

    #[test]
    fn unpack_rejects_uninitialized_and_foreign_data() {
        assert_eq!(
            RegistryInstance::unpack(&[]),
            Err(ArcError::AccountNotInitialized)
        );
        assert_eq!(
            RegistryInstance::unpack(&[0; 64]),
            Err(ArcError::AccountNotInitialized)
        );

        let mut foreign = [0u8; 64];
        foreign[..8].copy_from_slice(&1234u64.to_le_bytes());
        assert_eq!(
            RegistryInstance::unpack(&foreign),
            Err(ArcError::InvalidAccountDiscriminant)
        );
    }

    #[test]
    fn pack_into_too_small_account() {
        let instance = RegistryInstance {
            registry: Address::new_from_array([1; 32]),
            instance: 0,
            entities: 0,
        };
        let mut data = vec![0; instance.account_len() - 1];
        assert_eq!(
            instance.pack_into(&mut data),
            Err(ArcError::InsufficientAccountSpace)
        );
    }
}
