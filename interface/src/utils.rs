//! Account checks shared by all three programs.

use solana_account_view::AccountView;
use solana_address::Address;

use crate::error::{
    ArcError,
    ArcResult,
};

pub const SPL_TOKEN_ID: Address =
    Address::from_str_const("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
pub const SPL_TOKEN_2022_ID: Address =
    Address::from_str_const("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");
/// The packed length of an SPL token mint, without token-2022 extensions.
pub const MINT_LEN: usize = 82;
/// Offset of a mint's `is_initialized` flag, after its authority option, supply and decimals.
pub const MINT_IS_INITIALIZED_OFFSET: usize = 45;

#[inline(always)]
pub fn owned_by(account: &AccountView, owner: &Address) -> bool {
    account.owned_by(owner)
}

#[inline(always)]
pub fn check_signer(account: &AccountView) -> ArcResult {
    if !account.is_signer() {
        return Err(ArcError::MissingRequiredSignature);
    }
    Ok(())
}

#[inline(always)]
pub fn check_writable(account: &AccountView) -> ArcResult {
    if !account.is_writable() {
        return Err(ArcError::AccountNotWritable);
    }
    Ok(())
}

#[inline(always)]
pub fn check_address(account: &AccountView, expected: &Address) -> ArcResult {
    if account.address() != expected {
        return Err(ArcError::IncorrectAddress);
    }
    Ok(())
}

#[inline(always)]
pub fn check_program(account: &AccountView, program_id: &Address) -> ArcResult {
    if account.address() != program_id {
        return Err(ArcError::IncorrectProgramId);
    }
    Ok(())
}

/// Checks the account is an initialized SPL token or token-2022 mint.
pub fn check_mint(mint: &AccountView) -> ArcResult {
    if !(owned_by(mint, &SPL_TOKEN_ID) || owned_by(mint, &SPL_TOKEN_2022_ID)) {
        return Err(ArcError::InvalidMintAccount);
    }
    if mint.data_len() < MINT_LEN {
        return Err(ArcError::InvalidMintAccount);
    }

    let data = mint
        .try_borrow()
        .map_err(|_| ArcError::InvalidMintAccount)?;
    if data[MINT_IS_INITIALIZED_OFFSET] != 1 {
        return Err(ArcError::InvalidMintAccount);
    }
    Ok(())
}
