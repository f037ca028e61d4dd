use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_sdk::{
    instruction::AccountMeta,
    pubkey::Pubkey,
};

use crate::{
    error::PnftInterfaceResult,
    instructions::PnftMethod,
    pack::{
        pack_with_discriminator,
        unpack_with_discriminator,
    },
    program_ids::*,
    state::authorization::AuthorizationData,
};

/// Moves a pNFT from the authority's token account into the listing escrow and initializes the
/// listing account.
///
/// The program creates both `listing` and `listing_item_token`, so neither may exist yet.
///
/// ### Accounts
///  0. `[READ]` Item mint
///  1. `[WRITE]` Authority item token account
///  2. `[WRITE]` Listing PDA, `[mint, "listings"]`
///  3. `[WRITE]` Listing item token account, the listing's associated token account
///  4. `[WRITE, SIGNER]` Authority
///  5. `[READ]` Token program
///  6. `[READ]` System program
///  7. `[READ]` Rent sysvar
///  8. `[READ]` Associated token program
///  9. `[WRITE]` Item metadata
/// 10. `[READ]` Edition
/// 11. `[WRITE]` Authority token record
/// 12. `[WRITE]` Listing token record
/// 13. `[READ]` Token metadata program
/// 14. `[READ]` Instructions sysvar
/// 15. `[READ]` Token auth rules program
///
/// Remaining accounts: `[READ]` rule set, if and only if `rules_acc_present`.
pub struct ListPnft {
    pub item: Pubkey,
    pub authority_item_token: Pubkey,
    pub listing: Pubkey,
    pub listing_item_token: Pubkey,
    pub authority: Pubkey,
    pub item_metadata: Pubkey,
    pub edition: Pubkey,
    pub authority_token_record: Pubkey,
    pub listing_token_record: Pubkey,
}

impl ListPnft {
    pub const NUM_ACCOUNTS: usize = 16;

    pub fn create_account_metas(&self) -> [AccountMeta; Self::NUM_ACCOUNTS] {
        [
            AccountMeta::new_readonly(self.item, false),
            AccountMeta::new(self.authority_item_token, false),
            AccountMeta::new(self.listing, false),
            AccountMeta::new(self.listing_item_token, false),
            AccountMeta::new(self.authority, true),
            AccountMeta::new_readonly(SPL_TOKEN_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
            AccountMeta::new_readonly(SPL_ASSOCIATED_TOKEN_ACCOUNT_ID, false),
            AccountMeta::new(self.item_metadata, false),
            AccountMeta::new_readonly(self.edition, false),
            AccountMeta::new(self.authority_token_record, false),
            AccountMeta::new(self.listing_token_record, false),
            AccountMeta::new_readonly(TOKEN_METADATA_ID, false),
            AccountMeta::new_readonly(SYSVAR_INSTRUCTIONS_ID, false),
            AccountMeta::new_readonly(TOKEN_AUTH_RULES_ID, false),
        ]
    }
}

/// `list_pnft(price, authorization_data, rules_acc_present)`
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ListPnftInstructionData {
    /// Price in lamports.
    pub price: u64,
    pub authorization_data: Option<AuthorizationData>,
    pub rules_acc_present: bool,
}

impl ListPnftInstructionData {
    pub fn pack(&self) -> Vec<u8> {
        pack_with_discriminator(PnftMethod::ListPnft.discriminator(), self)
    }

    pub fn unpack(data: &[u8]) -> PnftInterfaceResult<Self> {
        unpack_with_discriminator(PnftMethod::ListPnft.discriminator(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_follows_discriminator() {
        let data = ListPnftInstructionData {
            price: 10_000_000,
            authorization_data: None,
            rules_acc_present: false,
        };
        let packed = data.pack();
        assert_eq!(packed[..8], PnftMethod::ListPnft.discriminator());
        assert_eq!(packed[8..16], 10_000_000u64.to_le_bytes());
        assert_eq!(packed[16..], [0, 0]);
        assert_eq!(ListPnftInstructionData::unpack(&packed), Ok(data));
    }

    #[test]
    fn authority_is_the_only_signer() {
        let ix = ListPnft {
            item: Pubkey::new_unique(),
            authority_item_token: Pubkey::new_unique(),
            listing: Pubkey::new_unique(),
            listing_item_token: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
            item_metadata: Pubkey::new_unique(),
            edition: Pubkey::new_unique(),
            authority_token_record: Pubkey::new_unique(),
            listing_token_record: Pubkey::new_unique(),
        };
        let metas = ix.create_account_metas();
        assert_eq!(metas.iter().filter(|m| m.is_signer).count(), 1);
        assert!(metas[4].is_signer && metas[4].is_writable);
        assert_eq!(metas[4].pubkey, ix.authority);
        assert!(metas[2].is_writable && metas[3].is_writable);
    }
}
