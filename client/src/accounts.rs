use std::fmt::Display;

use itertools::Itertools;
use pnft_interface::{
    instructions::PnftMethod,
    state::authorization::AuthorizationData,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    authorization::{
        encode_authorization,
        listing_source_mint,
        AuthorizationContext,
    },
    error::PnftClientError,
    logs::{
        log_info,
        log_warning,
    },
    metadata::{
        fetch_metadata,
        AccountSource,
    },
    pda::{
        find_edition_address,
        find_token_record_address,
    },
};

/// Inputs to [`prep_pnft_accounts`].
#[derive(Clone, Debug)]
pub struct PrepPnftAccounts {
    pub mint: Pubkey,
    /// The token account the item moves out of.
    pub source_token: Pubkey,
    /// The token account the item moves into.
    pub destination_token: Pubkey,
    pub metadata_hint: Option<Pubkey>,
    pub authorization: AuthorizationContext,
    /// The method the accounts are for, used to validate `authorization`.
    pub method: PnftMethod,
}

/// Every derived account a pNFT instruction needs, plus the encoded authorization payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PnftAccounts {
    pub metadata: Pubkey,
    pub creators: Vec<Pubkey>,
    pub source_token_record: Pubkey,
    pub source_token_record_bump: u8,
    pub destination_token_record: Pubkey,
    pub destination_token_record_bump: u8,
    pub edition: Pubkey,
    pub rule_set: Option<Pubkey>,
    pub authorization_data: Option<AuthorizationData>,
}

/// Resolves metadata, derives the token records and edition, and encodes the authorization
/// payload. The metadata read is the only I/O.
pub fn prep_pnft_accounts(
    source: &impl AccountSource,
    args: PrepPnftAccounts,
) -> anyhow::Result<PnftAccounts> {
    let PrepPnftAccounts {
        mint,
        source_token,
        destination_token,
        metadata_hint,
        authorization,
        method,
    } = args;

    if source_token == destination_token {
        return Err(PnftClientError::SameSourceAndDestination(source_token).into());
    }

    let authorization_data = encode_authorization(&authorization, method)?;
    let metadata = fetch_metadata(source, &mint, metadata_hint)?;

    let (source_token_record, source_token_record_bump) =
        find_token_record_address(&mint, &source_token)?;
    let (destination_token_record, destination_token_record_bump) =
        find_token_record_address(&mint, &destination_token)?;
    let (edition, _) = find_edition_address(&mint)?;

    Ok(PnftAccounts {
        metadata: metadata.metadata_address,
        creators: metadata.creators,
        source_token_record,
        source_token_record_bump,
        destination_token_record,
        destination_token_record_bump,
        edition,
        rule_set: metadata.rule_set,
        authorization_data,
    })
}

impl PnftAccounts {
    /// Logs the derived accounts, labelled with the names the program uses for `method`.
    pub fn log(&self, method: PnftMethod) {
        let (source_label, destination_label) = match method {
            PnftMethod::TransferPnft => ("ownerTokenRecord", "destTokenRecord"),
            PnftMethod::ListPnft => ("authorityTokenRecord", "listingTokenRecord"),
            PnftMethod::BuyPnft => ("listingTokenRecord", "buyerTokenRecord"),
        };
        log_info("itemMetadata", self.metadata);
        log_info("edition", self.edition);
        log_info(source_label, self.source_token_record);
        log_info(destination_label, self.destination_token_record);
        log_info("creators", self.creators.iter().join(", "));
        log_info("ruleset", display_or(self.rule_set, "no ruleset"));
        log_info(
            "authorizationData",
            display_or(
                self.authorization_data
                    .as_ref()
                    .map(|data| data.names().join(", ")),
                "none",
            ),
        );
        if let Some(data) = &self.authorization_data {
            match listing_source_mint(data) {
                Ok(Some(mint)) => log_info("sourceSeeds", format!("listing of {mint}")),
                Ok(None) => {}
                Err(e) => log_warning("sourceSeeds", e),
            }
        }
    }
}

fn display_or<T: Display>(value: Option<T>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), |v| v.to_string())
}
