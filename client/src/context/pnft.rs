//! Builders for the `pnft_transfer` program's instructions.

use pnft_interface::{
    instructions::{
        BuyPnft,
        ListPnft,
        PnftMethod,
        TransferPnft,
    },
    program,
};
use solana_sdk::{
    instruction::AccountMeta,
    pubkey::Pubkey,
};

use crate::{
    accounts::{
        prep_pnft_accounts,
        PnftAccounts,
        PrepPnftAccounts,
    },
    authorization::AuthorizationContext,
    logs::log_divider,
    metadata::AccountSource,
    pda::{
        find_listing_address,
        get_associated_token_address,
        get_listing_escrow_address,
    },
    pnft_instruction::{
        PnftArgs,
        PnftInstruction,
    },
};

/// The rule set address passed in `buy_pnft`'s `ruleset` slot when the item's metadata doesn't
/// name one.
pub const DEFAULT_BUY_RULE_SET_FALLBACK: Pubkey =
    Pubkey::from_str_const("eBJLFYPxJmMGKuFwpDWkzxZeUrad92kZRC5BJLpzyT9");

/// Which form of `buy_pnft` to call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuyAuthorization {
    /// `buy_pnft()`. The deployed program signs for the listing with its own seeds.
    #[default]
    Omitted,
    /// `buy_pnft(authorization_data, rules_acc_present)`, passing the listing's `SourceSeeds`.
    SourceSeeds,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PnftConfig {
    pub program_id: Pubkey,
    pub buy_rule_set_fallback: Pubkey,
    pub buy_authorization: BuyAuthorization,
    /// Log the derived accounts of every instruction built.
    pub debug_logs: bool,
}

impl Default for PnftConfig {
    fn default() -> Self {
        Self {
            program_id: program::ID,
            buy_rule_set_fallback: DEFAULT_BUY_RULE_SET_FALLBACK,
            buy_authorization: BuyAuthorization::default(),
            debug_logs: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransferPnftArgs {
    pub mint: Pubkey,
    pub source_token: Pubkey,
    pub destination_token: Pubkey,
    pub owner: Pubkey,
    /// The owner of `destination_token`.
    pub receiver: Pubkey,
    pub metadata_hint: Option<Pubkey>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListPnftArgs {
    pub mint: Pubkey,
    pub authority: Pubkey,
    pub listing: Pubkey,
    /// The escrow token account, owned by `listing`.
    pub listing_token: Pubkey,
    pub metadata_hint: Option<Pubkey>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuyPnftArgs {
    pub mint: Pubkey,
    pub listing: Pubkey,
    pub listing_token: Pubkey,
    pub buyer: Pubkey,
    pub metadata_hint: Option<Pubkey>,
}

/// Builds pNFT instructions under an explicit [`PnftConfig`].
///
/// Building reads the item's metadata account from the given [`AccountSource`] and does no other
/// I/O.
#[derive(Clone, Debug, Default)]
pub struct PnftContext {
    pub config: PnftConfig,
}

impl PnftContext {
    pub fn new(config: PnftConfig) -> Self {
        Self { config }
    }

    pub fn program_id(&self) -> Pubkey {
        self.config.program_id
    }

    /// Moves the item from `source_token` to `destination_token`.
    pub fn transfer(
        &self,
        source: &impl AccountSource,
        args: TransferPnftArgs,
    ) -> anyhow::Result<PnftInstruction> {
        let TransferPnftArgs {
            mint,
            source_token,
            destination_token,
            owner,
            receiver,
            metadata_hint,
        } = args;

        let accounts = self.prep(
            source,
            PrepPnftAccounts {
                mint,
                source_token,
                destination_token,
                metadata_hint,
                authorization: AuthorizationContext::None,
                method: PnftMethod::TransferPnft,
            },
        )?;

        let fixed_accounts = TransferPnft {
            owner,
            receiver,
            src: source_token,
            dest: destination_token,
            nft_mint: mint,
            nft_metadata: accounts.metadata,
            edition: accounts.edition,
            owner_token_record: accounts.source_token_record,
            dest_token_record: accounts.destination_token_record,
        }
        .create_account_metas();

        Ok(PnftInstruction {
            program_id: self.config.program_id,
            fixed_accounts: fixed_accounts.to_vec(),
            rule_set: rule_set_meta(accounts.rule_set),
            args: PnftArgs::Transfer {
                authorization_data: accounts.authorization_data,
            },
        })
    }

    /// Moves the item from the authority's associated token account into the listing escrow.
    pub fn list(
        &self,
        source: &impl AccountSource,
        price: u64,
        args: ListPnftArgs,
    ) -> anyhow::Result<PnftInstruction> {
        let ListPnftArgs {
            mint,
            authority,
            listing,
            listing_token,
            metadata_hint,
        } = args;
        let authority_token = get_associated_token_address(&authority, &mint);

        let accounts = self.prep(
            source,
            PrepPnftAccounts {
                mint,
                source_token: authority_token,
                destination_token: listing_token,
                metadata_hint,
                authorization: AuthorizationContext::None,
                method: PnftMethod::ListPnft,
            },
        )?;

        let fixed_accounts = ListPnft {
            item: mint,
            authority_item_token: authority_token,
            listing,
            listing_item_token: listing_token,
            authority,
            item_metadata: accounts.metadata,
            edition: accounts.edition,
            authority_token_record: accounts.source_token_record,
            listing_token_record: accounts.destination_token_record,
        }
        .create_account_metas();

        Ok(PnftInstruction {
            program_id: self.config.program_id,
            fixed_accounts: fixed_accounts.to_vec(),
            rule_set: rule_set_meta(accounts.rule_set),
            args: PnftArgs::List {
                price,
                authorization_data: accounts.authorization_data,
            },
        })
    }

    /// Moves the item from the listing escrow to the buyer's associated token account.
    pub fn buy(
        &self,
        source: &impl AccountSource,
        args: BuyPnftArgs,
    ) -> anyhow::Result<PnftInstruction> {
        let BuyPnftArgs {
            mint,
            listing,
            listing_token,
            buyer,
            metadata_hint,
        } = args;
        let buyer_token = get_associated_token_address(&buyer, &mint);

        let authorization = match self.config.buy_authorization {
            BuyAuthorization::Omitted => AuthorizationContext::None,
            BuyAuthorization::SourceSeeds => AuthorizationContext::ListingSource { mint },
        };

        let accounts = self.prep(
            source,
            PrepPnftAccounts {
                mint,
                source_token: listing_token,
                destination_token: buyer_token,
                metadata_hint,
                authorization,
                method: PnftMethod::BuyPnft,
            },
        )?;

        let fixed_accounts = BuyPnft {
            item: mint,
            buyer_item_token: buyer_token,
            listing,
            listing_item_token: listing_token,
            buyer,
            item_metadata: accounts.metadata,
            edition: accounts.edition,
            buyer_token_record: accounts.destination_token_record,
            listing_token_record: accounts.source_token_record,
            ruleset: accounts
                .rule_set
                .unwrap_or(self.config.buy_rule_set_fallback),
        }
        .create_account_metas();

        let args = match self.config.buy_authorization {
            BuyAuthorization::Omitted => PnftArgs::Buy,
            BuyAuthorization::SourceSeeds => PnftArgs::BuyWithAuthorization {
                authorization_data: accounts.authorization_data,
            },
        };

        Ok(PnftInstruction {
            program_id: self.config.program_id,
            fixed_accounts: fixed_accounts.to_vec(),
            rule_set: rule_set_meta(accounts.rule_set),
            args,
        })
    }

    /// [`Self::list`] with the listing PDA and its escrow derived from `mint`.
    pub fn list_for_mint(
        &self,
        source: &impl AccountSource,
        price: u64,
        mint: Pubkey,
        authority: Pubkey,
    ) -> anyhow::Result<PnftInstruction> {
        let (listing, listing_token) = self.listing_for_mint(&mint)?;
        self.list(
            source,
            price,
            ListPnftArgs {
                mint,
                authority,
                listing,
                listing_token,
                metadata_hint: None,
            },
        )
    }

    /// [`Self::buy`] with the listing PDA and its escrow derived from `mint`.
    pub fn buy_for_mint(
        &self,
        source: &impl AccountSource,
        mint: Pubkey,
        buyer: Pubkey,
    ) -> anyhow::Result<PnftInstruction> {
        let (listing, listing_token) = self.listing_for_mint(&mint)?;
        self.buy(
            source,
            BuyPnftArgs {
                mint,
                listing,
                listing_token,
                buyer,
                metadata_hint: None,
            },
        )
    }

    /// The listing PDA for `mint` under the configured program, and its escrow token account.
    pub fn listing_for_mint(&self, mint: &Pubkey) -> anyhow::Result<(Pubkey, Pubkey)> {
        let (listing, _) = find_listing_address(mint, &self.config.program_id)?;
        Ok((listing, get_listing_escrow_address(mint, &listing)))
    }

    fn prep(
        &self,
        source: &impl AccountSource,
        args: PrepPnftAccounts,
    ) -> anyhow::Result<PnftAccounts> {
        let method = args.method;
        let accounts = prep_pnft_accounts(source, args)?;
        if self.config.debug_logs {
            log_divider();
            accounts.log(method);
        }
        Ok(accounts)
    }
}

fn rule_set_meta(rule_set: Option<Pubkey>) -> Option<AccountMeta> {
    rule_set.map(|key| AccountMeta::new_readonly(key, false))
}
