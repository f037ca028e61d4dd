use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    error::PnftInterfaceResult,
    pack::{
        pack_with_discriminator,
        unpack_with_discriminator,
    },
};

/// `sha256("account:Listing")[..8]`
pub const LISTING_DISCRIMINATOR: [u8; 8] = [218, 32, 50, 73, 43, 134, 26, 58];

/// Space the program allocates for a listing account, discriminator included.
pub const LISTING_ACCOUNT_LEN: usize = 8 + 128;

/// An open sale, created by `list_pnft` and read by `buy_pnft`.
///
/// The account lives at `[mint, "listings"]` under the `pnft_transfer` program and is the
/// authority of the escrow token account `item_token`.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    pub bump: u8,
    pub item: [u8; 32],
    pub item_token: [u8; 32],
}

impl Listing {
    pub fn item(&self) -> Pubkey {
        Pubkey::new_from_array(self.item)
    }

    pub fn item_token(&self) -> Pubkey {
        Pubkey::new_from_array(self.item_token)
    }

    /// Decodes a listing from its account data. Zero padding after the fields is ignored.
    pub fn try_from_account_data(data: &[u8]) -> PnftInterfaceResult<Self> {
        const FIELDS_LEN: usize = 8 + 1 + 32 + 32;
        let data = data.get(..FIELDS_LEN).unwrap_or(data);
        unpack_with_discriminator(LISTING_DISCRIMINATOR, data)
    }

    /// Packs the listing the way the program stores it, padded to [`LISTING_ACCOUNT_LEN`].
    pub fn to_account_data(&self) -> Vec<u8> {
        let mut data = pack_with_discriminator(LISTING_DISCRIMINATOR, self);
        data.resize(LISTING_ACCOUNT_LEN, 0);
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PnftInterfaceError;

    #[test]
    fn listing_account_data() {
        let listing = Listing {
            bump: 253,
            item: [1; 32],
            item_token: [2; 32],
        };
        let data = listing.to_account_data();
        assert_eq!(data.len(), LISTING_ACCOUNT_LEN);
        assert_eq!(data[..8], LISTING_DISCRIMINATOR);
        assert_eq!(data[8], 253);
        assert_eq!(Listing::try_from_account_data(&data), Ok(listing.clone()));
        assert_eq!(listing.item(), Pubkey::new_from_array([1; 32]));
    }

    #[test]
    fn rejects_foreign_accounts() {
        let mut data = Listing {
            bump: 1,
            item: [0; 32],
            item_token: [0; 32],
        }
        .to_account_data();
        data[0] ^= 0xff;
        assert_eq!(
            Listing::try_from_account_data(&data),
            Err(PnftInterfaceError::InvalidDiscriminator)
        );
        assert_eq!(
            Listing::try_from_account_data(&data[..20]),
            Err(PnftInterfaceError::InvalidDiscriminator)
        );
    }
}
