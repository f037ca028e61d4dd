pub mod pnft;
pub mod token;
