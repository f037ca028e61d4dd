use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_sdk::{
    instruction::AccountMeta,
    pubkey::Pubkey,
};

use crate::{
    error::{
        PnftInterfaceError,
        PnftInterfaceResult,
    },
    instructions::PnftMethod,
    pack::{
        pack_with_discriminator,
        strip_discriminator,
    },
    program_ids::*,
    state::authorization::AuthorizationData,
};

/// Moves a listed pNFT from the listing escrow to the buyer, signed by the listing PDA.
///
/// Unlike transfer and list, the rule set account is always part of the fixed account list.
///
/// ### Accounts
///  0. `[READ]` Item mint
///  1. `[WRITE]` Buyer item token account
///  2. `[WRITE]` Listing PDA
///  3. `[WRITE]` Listing item token account
///  4. `[WRITE, SIGNER]` Buyer
///  5. `[READ]` Token program
///  6. `[READ]` System program
///  7. `[READ]` Rent sysvar
///  8. `[READ]` Associated token program
///  9. `[WRITE]` Item metadata
/// 10. `[WRITE]` Edition
/// 11. `[WRITE]` Buyer token record
/// 12. `[WRITE]` Listing token record
/// 13. `[READ]` Token metadata program
/// 14. `[READ]` Instructions sysvar
/// 15. `[READ]` Token auth rules program
/// 16. `[READ]` Rule set
///
/// Remaining accounts: `[READ]` the metadata's rule set, if it names one.
pub struct BuyPnft {
    pub item: Pubkey,
    pub buyer_item_token: Pubkey,
    pub listing: Pubkey,
    pub listing_item_token: Pubkey,
    pub buyer: Pubkey,
    pub item_metadata: Pubkey,
    pub edition: Pubkey,
    pub buyer_token_record: Pubkey,
    pub listing_token_record: Pubkey,
    pub ruleset: Pubkey,
}

impl BuyPnft {
    pub const NUM_ACCOUNTS: usize = 17;

    pub fn create_account_metas(&self) -> [AccountMeta; Self::NUM_ACCOUNTS] {
        [
            AccountMeta::new_readonly(self.item, false),
            AccountMeta::new(self.buyer_item_token, false),
            AccountMeta::new(self.listing, false),
            AccountMeta::new(self.listing_item_token, false),
            AccountMeta::new(self.buyer, true),
            AccountMeta::new_readonly(SPL_TOKEN_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
            AccountMeta::new_readonly(SPL_ASSOCIATED_TOKEN_ACCOUNT_ID, false),
            AccountMeta::new(self.item_metadata, false),
            AccountMeta::new(self.edition, false),
            AccountMeta::new(self.buyer_token_record, false),
            AccountMeta::new(self.listing_token_record, false),
            AccountMeta::new_readonly(TOKEN_METADATA_ID, false),
            AccountMeta::new_readonly(SYSVAR_INSTRUCTIONS_ID, false),
            AccountMeta::new_readonly(TOKEN_AUTH_RULES_ID, false),
            AccountMeta::new_readonly(self.ruleset, false),
        ]
    }
}

/// `buy_pnft()` as deployed, or `buy_pnft(authorization_data, rules_acc_present)` for a program
/// build that accepts the listing's seeds proof from the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuyPnftInstructionData {
    NoArgs,
    WithAuthorization(BuyPnftAuthorizationArgs),
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct BuyPnftAuthorizationArgs {
    pub authorization_data: Option<AuthorizationData>,
    pub rules_acc_present: bool,
}

impl BuyPnftInstructionData {
    pub fn pack(&self) -> Vec<u8> {
        let discriminator = PnftMethod::BuyPnft.discriminator();
        match self {
            Self::NoArgs => discriminator.to_vec(),
            Self::WithAuthorization(args) => pack_with_discriminator(discriminator, args),
        }
    }

    pub fn unpack(data: &[u8]) -> PnftInterfaceResult<Self> {
        let rest = strip_discriminator(PnftMethod::BuyPnft.discriminator(), data)?;
        if rest.is_empty() {
            return Ok(Self::NoArgs);
        }
        borsh::from_slice(rest)
            .map(Self::WithAuthorization)
            .map_err(|_| PnftInterfaceError::InvalidInstructionData)
    }
}
