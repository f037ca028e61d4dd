//! PDA helpers for deriving the addresses a pNFT instruction touches.
//!
//! Nothing here is cached: every address is recomputed from its seeds on each call.

use pnft_interface::{
    program_ids::TOKEN_METADATA_ID,
    seeds::{
        EDITION_SEED,
        LISTING_SEED,
        METADATA_PREFIX,
        TOKEN_RECORD_SEED,
    },
};
use solana_sdk::pubkey::Pubkey;

use crate::error::PnftClientError;

fn try_find(seeds: &[&[u8]], program_id: &Pubkey) -> anyhow::Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, program_id).ok_or_else(|| {
        PnftClientError::Derivation(format!("no viable bump for seeds under {program_id}")).into()
    })
}

pub fn find_metadata_address(mint: &Pubkey) -> anyhow::Result<(Pubkey, u8)> {
    try_find(
        &[METADATA_PREFIX, TOKEN_METADATA_ID.as_ref(), mint.as_ref()],
        &TOKEN_METADATA_ID,
    )
}

/// Master editions and print editions live at the same address.
pub fn find_edition_address(mint: &Pubkey) -> anyhow::Result<(Pubkey, u8)> {
    try_find(
        &[
            METADATA_PREFIX,
            TOKEN_METADATA_ID.as_ref(),
            mint.as_ref(),
            EDITION_SEED,
        ],
        &TOKEN_METADATA_ID,
    )
}

/// The token record for `token_account`'s holding of `mint`. One per (mint, token account).
pub fn find_token_record_address(
    mint: &Pubkey,
    token_account: &Pubkey,
) -> anyhow::Result<(Pubkey, u8)> {
    try_find(
        &[
            METADATA_PREFIX,
            TOKEN_METADATA_ID.as_ref(),
            mint.as_ref(),
            TOKEN_RECORD_SEED,
            token_account.as_ref(),
        ],
        &TOKEN_METADATA_ID,
    )
}

pub fn find_listing_address(mint: &Pubkey, program_id: &Pubkey) -> anyhow::Result<(Pubkey, u8)> {
    try_find(&[mint.as_ref(), LISTING_SEED], program_id)
}

/// The associated token account of `owner` for `mint` under the SPL token program. `owner` may
/// be off-curve, e.g. a listing PDA.
pub fn get_associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account_interface::address::get_associated_token_address(owner, mint)
}

/// The escrow token account a listing holds the item in.
pub fn get_listing_escrow_address(mint: &Pubkey, listing: &Pubkey) -> Pubkey {
    get_associated_token_address(listing, mint)
}

/// Converts raw identity bytes to a [`Pubkey`], failing on anything but 32 bytes.
pub fn pubkey_from_slice(bytes: &[u8]) -> anyhow::Result<Pubkey> {
    Pubkey::try_from(bytes).map_err(|_| {
        PnftClientError::Derivation(format!("expected 32 bytes, got {}", bytes.len())).into()
    })
}
