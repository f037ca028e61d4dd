pub mod authorization;
pub mod listing;
pub mod metadata;
