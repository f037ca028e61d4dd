//! Helpers for pretty-printing pNFT instructions in a readable, colorized format.

pub mod instruction;
