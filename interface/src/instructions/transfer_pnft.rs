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

/// Transfers a pNFT from `src` to `dest` through token-metadata's `Transfer`.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Owner
///  1. `[READ]` Receiver, the owner of `dest`
///  2. `[WRITE]` Source token account
///  3. `[WRITE]` Destination token account
///  4. `[READ]` Mint
///  5. `[READ]` Token program
///  6. `[READ]` System program
///  7. `[READ]` Rent sysvar
///  8. `[READ]` Associated token program
///  9. `[WRITE]` Metadata
/// 10. `[READ]` Edition
/// 11. `[WRITE]` Owner token record
/// 12. `[WRITE]` Destination token record
/// 13. `[READ]` Token metadata program
/// 14. `[READ]` Instructions sysvar
/// 15. `[READ]` Token auth rules program
///
/// Remaining accounts: `[READ]` rule set, if and only if `rules_acc_present`.
pub struct TransferPnft {
    pub owner: Pubkey,
    pub receiver: Pubkey,
    pub src: Pubkey,
    pub dest: Pubkey,
    pub nft_mint: Pubkey,
    pub nft_metadata: Pubkey,
    pub edition: Pubkey,
    pub owner_token_record: Pubkey,
    pub dest_token_record: Pubkey,
}

impl TransferPnft {
    pub const NUM_ACCOUNTS: usize = 16;

    pub fn create_account_metas(&self) -> [AccountMeta; Self::NUM_ACCOUNTS] {
        [
            AccountMeta::new(self.owner, true),
            AccountMeta::new_readonly(self.receiver, false),
            AccountMeta::new(self.src, false),
            AccountMeta::new(self.dest, false),
            AccountMeta::new_readonly(self.nft_mint, false),
            AccountMeta::new_readonly(SPL_TOKEN_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
            AccountMeta::new_readonly(SPL_ASSOCIATED_TOKEN_ACCOUNT_ID, false),
            AccountMeta::new(self.nft_metadata, false),
            AccountMeta::new_readonly(self.edition, false),
            AccountMeta::new(self.owner_token_record, false),
            AccountMeta::new(self.dest_token_record, false),
            AccountMeta::new_readonly(TOKEN_METADATA_ID, false),
            AccountMeta::new_readonly(SYSVAR_INSTRUCTIONS_ID, false),
            AccountMeta::new_readonly(TOKEN_AUTH_RULES_ID, false),
        ]
    }
}

/// `transfer_pnft(authorization_data, rules_acc_present)`
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransferPnftInstructionData {
    pub authorization_data: Option<AuthorizationData>,
    pub rules_acc_present: bool,
}

impl TransferPnftInstructionData {
    pub fn pack(&self) -> Vec<u8> {
        pack_with_discriminator(PnftMethod::TransferPnft.discriminator(), self)
    }

    pub fn unpack(data: &[u8]) -> PnftInterfaceResult<Self> {
        unpack_with_discriminator(PnftMethod::TransferPnft.discriminator(), data)
    }
}
