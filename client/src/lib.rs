//! Client-side builders for the `pnft_transfer` program.
//!
//! Derives the accounts a programmable NFT transfer, listing, or purchase touches, builds the
//! instructions, and submits them. Includes logging and pretty-printing utilities.

pub mod accounts;
pub mod authorization;
pub mod context;
pub mod error;
pub mod logs;
pub mod metadata;
pub mod pda;
pub mod pnft_instruction;
pub mod pretty;
pub mod test_accounts;
pub mod test_fixtures;
pub mod transactions;

pub use logs::LogColor;
