//! Token-level context for a pNFT mint: associated token accounts and token account balances.

use pnft_interface::program_ids::SPL_TOKEN_ID;
use solana_sdk::{
    instruction::Instruction,
    program_pack::Pack,
    pubkey::Pubkey,
};
use spl_associated_token_account_interface::instruction::create_associated_token_account_idempotent;
use spl_token_interface::state::Account as TokenAccount;

use crate::pda::get_associated_token_address;

/// pNFTs are always SPL token mints with zero decimals and a supply of one.
pub struct TokenContext {
    pub mint_address: Pubkey,
    pub token_program: Pubkey,
}

impl TokenContext {
    pub const fn new(mint_address: Pubkey) -> Self {
        Self {
            mint_address,
            token_program: SPL_TOKEN_ID,
        }
    }

    pub fn get_ata_for(&self, owner: &Pubkey) -> Pubkey {
        get_associated_token_address(owner, &self.mint_address)
    }

    /// Builds an idempotent create-ATA instruction for the given `owner`, funded by `funder`.
    pub fn create_ata_idempotent(&self, funder: &Pubkey, owner: &Pubkey) -> Instruction {
        create_associated_token_account_idempotent(
            funder,
            owner,
            &self.mint_address,
            &self.token_program,
        )
    }

    /// Unpacks an SPL token account's data and returns its balance, checking it holds this mint.
    pub fn balance_from_account_data(&self, data: &[u8]) -> anyhow::Result<u64> {
        let account = TokenAccount::unpack(data)?;
        if account.mint != self.mint_address {
            anyhow::bail!(
                "Token account holds {}, expected {}",
                account.mint,
                self.mint_address
            );
        }
        Ok(account.amount)
    }
}

#[cfg(test)]
mod tests {
    use spl_token_interface::state::AccountState;

    use super::*;

    #[test]
    fn balance_checks_mint() {
        let mint = Pubkey::new_unique();
        let context = TokenContext::new(mint);
        let account = TokenAccount {
            mint,
            owner: Pubkey::new_unique(),
            amount: 1,
            state: AccountState::Initialized,
            ..Default::default()
        };
        let mut data = vec![0; TokenAccount::LEN];
        TokenAccount::pack(account, &mut data).unwrap();

        assert_eq!(context.balance_from_account_data(&data).unwrap(), 1);
        assert!(TokenContext::new(Pubkey::new_unique())
            .balance_from_account_data(&data)
            .is_err());
    }

    #[test]
    fn ata_is_associated_address() {
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let context = TokenContext::new(mint);
        let ix = context.create_ata_idempotent(&owner, &owner);
        assert_eq!(ix.accounts[1].pubkey, context.get_ata_for(&owner));
    }
}
