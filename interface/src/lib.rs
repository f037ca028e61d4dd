//! Wire interface of the `pnft_transfer` program and the read-only token-metadata accounts it
//! works with.
//!
//! Nothing in this crate performs I/O; it only describes account orders, seeds, and the borsh
//! layouts of instruction data and account data.

pub mod error;
pub mod instructions;
pub mod pack;
pub mod program_ids;
pub mod seeds;
pub mod state;

pub mod program {
    use solana_sdk::pubkey::Pubkey;

    /// The deployed `pnft_transfer` program.
    pub const ID: Pubkey = Pubkey::from_str_const("4VL7z3sVLTEUt6NCbey5FxWSvwQrN7Yf9LXXjZz538wA");
}
