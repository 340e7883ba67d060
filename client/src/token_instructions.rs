//! SPL mint creation for ARC-NFTs. The ARC programs never mint tokens; they only bind an existing
//! mint to an entity.

use solana_address::Address;
use solana_instruction::Instruction;
use solana_sdk::program_pack::Pack;
use spl_token_interface::state::Mint;

/// NFT mints have no fractional units.
pub const NFT_DECIMALS: u8 = 0;

/// Returns the instructions that create `mint` as a rent-exempt account owned by `token_program`
/// and initialize it with `mint_authority`. Both `payer` and `mint` must sign.
pub fn create_nft_mint_instructions(
    payer: &Address,
    mint: &Address,
    mint_authority: &Address,
    rent_lamports: u64,
    token_program: &Address,
) -> anyhow::Result<[Instruction; 2]> {
    let create_mint_account = solana_system_interface::instruction::create_account(
        payer,
        mint,
        rent_lamports,
        Mint::LEN as u64,
        token_program,
    );

    // The token-2022 builder accepts either token program id.
    let initialize_mint = spl_token_2022_interface::instruction::initialize_mint2(
        token_program,
        mint,
        mint_authority,
        None,
        NFT_DECIMALS,
    )?;

    Ok([create_mint_account, initialize_mint])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_is_created_then_initialized_by_the_token_program() {
        let payer = Address::new_unique();
        let mint = Address::new_unique();
        let [create, initialize] = create_nft_mint_instructions(
            &payer,
            &mint,
            &payer,
            1_000_000,
            &spl_token_interface::ID,
        )
        .unwrap();

        assert_eq!(create.program_id, Address::default());
        assert!(create
            .accounts
            .iter()
            .all(|meta| meta.is_signer && meta.is_writable));
        assert_eq!(initialize.program_id, spl_token_interface::ID);
        assert_eq!(initialize.accounts[0].pubkey, mint);
    }
}
