use std::fmt::{
    self,
    Display,
    Formatter,
};

use pnft_interface::{
    error::PnftInterfaceError,
    instructions::PnftMethod,
};
use solana_sdk::pubkey::Pubkey;

/// Errors raised while deriving accounts or building pNFT instructions.
///
/// Functions in this crate return [`anyhow::Result`]; callers that need to branch on a specific
/// failure can `downcast_ref::<PnftClientError>()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PnftClientError {
    /// The mint has no metadata account, so it isn't a valid (programmable) NFT.
    MetadataNotFound { mint: Pubkey, metadata: Pubkey },
    /// The metadata account exists but isn't a token-metadata `Metadata` account.
    InvalidMetadata {
        metadata: Pubkey,
        reason: &'static str,
    },
    /// Malformed seed input, or no bump yields an off-curve address.
    Derivation(String),
    /// An authorization payload names the same entry twice.
    DuplicatePayloadName(String),
    /// The authorization context doesn't apply to this method.
    UnsupportedAuthorization(PnftMethod),
    /// Source and destination token accounts are the same account.
    SameSourceAndDestination(Pubkey),
    ListingNotFound(Pubkey),
    InvalidListing {
        listing: Pubkey,
        reason: PnftInterfaceError,
    },
}

impl Display for PnftClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MetadataNotFound { mint, metadata } => {
                write!(f, "No metadata account {metadata} for mint {mint}")
            }
            Self::InvalidMetadata { metadata, reason } => {
                write!(f, "Invalid metadata account {metadata}: {reason}")
            }
            Self::Derivation(msg) => write!(f, "Address derivation failed: {msg}"),
            Self::DuplicatePayloadName(name) => {
                write!(f, "Authorization payload has more than one `{name}` entry")
            }
            Self::UnsupportedAuthorization(method) => {
                write!(f, "Authorization context isn't supported for {method}")
            }
            Self::SameSourceAndDestination(token) => {
                write!(f, "Source and destination are both {token}")
            }
            Self::ListingNotFound(listing) => write!(f, "Listing {listing} doesn't exist"),
            Self::InvalidListing { listing, reason } => {
                write!(f, "Invalid listing account {listing}: {reason}")
            }
        }
    }
}

impl std::error::Error for PnftClientError {}
