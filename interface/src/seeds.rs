//! Seed constants for the PDAs used by pNFT instructions.

/// Prefix of every token-metadata PDA.
pub const METADATA_PREFIX: &[u8] = b"metadata";

/// Suffix of the (master) edition PDA. Master editions and print editions share these seeds.
pub const EDITION_SEED: &[u8] = b"edition";

/// Token record seed, followed by the holding token account.
pub const TOKEN_RECORD_SEED: &[u8] = b"token_record";

/// Listing seed. The listing PDA is `[mint, LISTING_SEED]` under the `pnft_transfer` program.
pub const LISTING_SEED: &[u8] = b"listings";
