//! Creating, loading, storing, resizing and closing program-owned accounts on-chain.

use alloc::vec::Vec;

use pinocchio::sysvars::{
    rent::Rent,
    Sysvar,
};
use pinocchio_system::instructions::{
    Allocate,
    Assign,
    CreateAccount,
    Transfer,
};
use solana_account_view::AccountView;
use solana_address::Address;
use solana_instruction_view::cpi::{
    Seed,
    Signer,
};
use solana_program_error::{
    ProgramError,
    ProgramResult,
};

use crate::{
    error::ArcError,
    state::ProgramAccount,
};

/// Checks that `account` is the PDA of `seeds` under `program_id` and returns its bump.
#[inline(always)]
pub fn check_pda(
    account: &AccountView,
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<u8, ArcError> {
    let (address, bump) = Address::try_find_program_address(seeds, program_id)
        .ok_or(ArcError::AddressDerivationFailed)?;
    if account.address() != &address {
        return Err(ArcError::IncorrectAddress);
    }
    Ok(bump)
}

/// Appends the bump to a PDA's seeds, giving the seeds it signs with.
#[inline(always)]
pub fn signer_seeds<'a>(seeds: &[&'a [u8]], bump: &'a [u8; 1]) -> Vec<Seed<'a>> {
    seeds
        .iter()
        .copied()
        .chain(core::iter::once(&bump[..]))
        .map(Seed::from)
        .collect()
}

/// Creates `account` as a rent-exempt PDA of `space` bytes owned by `owner`, funded by `payer`.
/// `seeds` must include the bump.
///
/// A PDA that already holds lamports can't be created with `CreateAccount`, so it is topped up to
/// rent exemption, then allocated and assigned instead.
///
/// ### Accounts
///   0. `[WRITE, SIGNER]` Payer
///   1. `[WRITE]` Account to create
pub fn create_pda_account(
    payer: &AccountView,
    account: &AccountView,
    space: usize,
    owner: &Address,
    seeds: &[Seed],
) -> ProgramResult {
    if !account.owned_by(&crate::state::SYSTEM_PROGRAM_ID) || account.data_len() != 0 {
        return Err(ArcError::AlreadyInitializedAccount.into());
    }

    let lamports = Rent::get()?.try_minimum_balance(space)?;
    let signer = [Signer::from(seeds)];

    if account.lamports() == 0 {
        return CreateAccount {
            from: payer, // WRITE
            to: account, // WRITE
            lamports,
            space: space as u64,
            owner,
        }
        .invoke_signed(&signer);
    }

    let shortfall = lamports.saturating_sub(account.lamports());
    if shortfall > 0 {
        Transfer {
            from: payer, // WRITE
            to: account, // WRITE
            lamports: shortfall,
        }
        .invoke()?;
    }

    Allocate {
        account, // WRITE, SIGNER
        space: space as u64,
    }
    .invoke_signed(&signer)?;

    Assign {
        account, // WRITE, SIGNER
        owner,
    }
    .invoke_signed(&signer)
}

/// Creates `account` as a PDA sized for `state` and writes `state` to it.
pub fn init_pda_account<T: ProgramAccount>(
    payer: &AccountView,
    account: &AccountView,
    owner: &Address,
    seeds: &[Seed],
    state: &T,
) -> ProgramResult {
    create_pda_account(payer, account, state.account_len(), owner, seeds)?;
    store(account, state)
}

/// Loads typed state from an account owned by `owner`.
#[inline(always)]
pub fn load<T: ProgramAccount>(account: &AccountView, owner: &Address) -> Result<T, ProgramError> {
    if !account.owned_by(owner) {
        return Err(ArcError::InvalidAccountOwner.into());
    }
    let data = account.try_borrow()?;
    Ok(T::unpack(&data)?)
}

#[inline(always)]
pub fn store<T: ProgramAccount>(account: &AccountView, state: &T) -> ProgramResult {
    let mut data = account.try_borrow_mut()?;
    state.pack_into(&mut data)?;
    Ok(())
}

/// Grows `account` to `new_len` bytes, with `payer` transferring the lamports needed to keep it
/// rent-exempt. Does nothing to the lamports if the account is already funded.
///
/// ### Accounts
///   0. `[WRITE, SIGNER]` Payer
///   1. `[WRITE]` Account to be resized
pub fn fund_then_resize(payer: &AccountView, account: &AccountView, new_len: usize) -> ProgramResult {
    let required = Rent::get()?.try_minimum_balance(new_len)?;
    let lamports_diff = required.saturating_sub(account.lamports());

    if lamports_diff > 0 {
        Transfer {
            from: payer, // WRITE
            to: account, // WRITE
            lamports: lamports_diff,
        }
        .invoke()?;
    }

    account.resize(new_len)
}

/// Shrinks `account` to `new_len` bytes and moves the lamports no longer needed for rent exemption
/// to `benefactor`. `account` must be owned by the executing program.
///
/// ### Accounts
///   0. `[WRITE]` Account to be resized
///   1. `[WRITE]` Benefactor
pub fn resize_then_refund(
    account: &AccountView,
    benefactor: &AccountView,
    new_len: usize,
) -> ProgramResult {
    account.resize(new_len)?;

    let required = Rent::get()?.try_minimum_balance(new_len)?;
    let excess = account.lamports().saturating_sub(required);

    if excess > 0 {
        let refunded = benefactor
            .lamports()
            .checked_add(excess)
            .ok_or(ArcError::ArithmeticOverflow)?;
        account.set_lamports(account.lamports() - excess);
        benefactor.set_lamports(refunded);
    }

    Ok(())
}

/// Closes a program-owned account, moving all of its lamports to `benefactor`.
///
/// ### Accounts
///   0. `[WRITE]` Account to close
///   1. `[WRITE]` Benefactor
pub fn close_to(account: &AccountView, benefactor: &AccountView) -> ProgramResult {
    let refunded = benefactor
        .lamports()
        .checked_add(account.lamports())
        .ok_or(ArcError::ArithmeticOverflow)?;
    benefactor.set_lamports(refunded);
    account.set_lamports(0);

    account.close()
}
