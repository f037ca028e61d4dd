//! Reads an asset's token-metadata account to discover its creators and optional rule set.

use std::collections::HashMap;

use anyhow::Context;
use pnft_interface::{
    program_ids::TOKEN_METADATA_ID,
    state::metadata::Metadata,
};
use solana_account::Account;
use solana_client::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;

use crate::{
    error::PnftClientError,
    pda::find_metadata_address,
};

/// Read-only access to on-chain accounts.
///
/// Implemented for the RPC client and for an in-memory account map, which is what tests use.
pub trait AccountSource {
    /// Returns `Ok(None)` when the account doesn't exist.
    fn get_account(&self, address: &Pubkey) -> anyhow::Result<Option<Account>>;
}

impl AccountSource for RpcClient {
    fn get_account(&self, address: &Pubkey) -> anyhow::Result<Option<Account>> {
        Ok(self
            .get_account_with_commitment(address, self.commitment())
            .with_context(|| format!("Couldn't fetch account {address}"))?
            .value)
    }
}

impl AccountSource for HashMap<Pubkey, Account> {
    fn get_account(&self, address: &Pubkey) -> anyhow::Result<Option<Account>> {
        Ok(self.get(address).cloned())
    }
}

impl<T: AccountSource + ?Sized> AccountSource for &T {
    fn get_account(&self, address: &Pubkey) -> anyhow::Result<Option<Account>> {
        (**self).get_account(address)
    }
}

/// What the instruction builders need from an asset's metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataInfo {
    pub metadata_address: Pubkey,
    pub creators: Vec<Pubkey>,
    pub rule_set: Option<Pubkey>,
    pub metadata: Metadata,
}

/// Fetches and decodes `mint`'s metadata account.
///
/// `metadata_hint` skips the address derivation when the caller already knows it; the account is
/// read either way since the rule set lives in its data.
pub fn fetch_metadata(
    source: &impl AccountSource,
    mint: &Pubkey,
    metadata_hint: Option<Pubkey>,
) -> anyhow::Result<MetadataInfo> {
    let metadata_address = match metadata_hint {
        Some(address) => address,
        None => find_metadata_address(mint)?.0,
    };

    let account = source
        .get_account(&metadata_address)?
        .ok_or(PnftClientError::MetadataNotFound {
            mint: *mint,
            metadata: metadata_address,
        })?;

    if account.owner != TOKEN_METADATA_ID {
        return Err(PnftClientError::InvalidMetadata {
            metadata: metadata_address,
            reason: "not owned by the token metadata program",
        }
        .into());
    }

    let metadata = Metadata::try_from_account_data(&account.data).map_err(|e| {
        PnftClientError::InvalidMetadata {
            metadata: metadata_address,
            reason: e.into(),
        }
    })?;

    if metadata.mint() != *mint {
        return Err(PnftClientError::InvalidMetadata {
            metadata: metadata_address,
            reason: "belongs to a different mint",
        }
        .into());
    }

    Ok(MetadataInfo {
        metadata_address,
        creators: metadata.creator_addresses(),
        rule_set: metadata.rule_set(),
        metadata,
    })
}
