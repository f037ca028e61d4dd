//! In-memory pNFT accounts for building instructions without a validator.

use std::collections::HashMap;

use pnft_interface::{
    program_ids::TOKEN_METADATA_ID,
    state::metadata::{
        Creator,
        Data,
        Metadata,
        ProgrammableConfig,
        TokenStandard,
        METADATA_V1_KEY,
    },
};
use solana_account::Account;
use solana_sdk::pubkey::Pubkey;

use crate::pda::find_metadata_address;

pub const NUM_CREATORS: usize = 5;

/// A pNFT mint with a metadata account and, optionally, a rule set.
pub struct PnftFixture {
    pub mint: Pubkey,
    pub metadata_address: Pubkey,
    pub creators: [Pubkey; NUM_CREATORS],
    pub rule_set: Option<Pubkey>,
    pub metadata: Metadata,
}

impl PnftFixture {
    /// A fresh mint whose five creators each hold a 20% share. `rule_set` is written to the
    /// metadata's programmable config.
    pub fn new(rule_set: Option<Pubkey>) -> anyhow::Result<Self> {
        let mint = Pubkey::new_unique();
        let (metadata_address, _) = find_metadata_address(&mint)?;
        let creators = std::array::from_fn(|_| Pubkey::new_unique());

        let metadata = Metadata {
            key: METADATA_V1_KEY,
            update_authority: creators[0].to_bytes(),
            mint: mint.to_bytes(),
            data: Data {
                name: "pNFT".into(),
                symbol: "PNFT".into(),
                uri: "https://example.com/pnft.json".into(),
                seller_fee_basis_points: 500,
                creators: Some(
                    creators
                        .iter()
                        .map(|creator| Creator {
                            address: creator.to_bytes(),
                            verified: false,
                            share: (100 / NUM_CREATORS) as u8,
                        })
                        .collect(),
                ),
            },
            primary_sale_happened: false,
            is_mutable: true,
            edition_nonce: Some(255),
            token_standard: Some(TokenStandard::ProgrammableNonFungible),
            collection: None,
            uses: None,
            collection_details: None,
            programmable_config: Some(ProgrammableConfig::V1 {
                rule_set: rule_set.map(|key| key.to_bytes()),
            }),
        };

        Ok(Self {
            mint,
            metadata_address,
            creators,
            rule_set,
            metadata,
        })
    }

    /// The metadata account as token-metadata would store it.
    pub fn metadata_account(&self) -> Account {
        Account {
            lamports: 5_616_720,
            data: self.metadata.to_account_data(),
            owner: TOKEN_METADATA_ID,
            executable: false,
            rent_epoch: 0,
        }
    }

    /// An account source holding only this fixture's metadata account.
    pub fn account_store(&self) -> HashMap<Pubkey, Account> {
        HashMap::from([(self.metadata_address, self.metadata_account())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::fetch_metadata;

    #[test]
    fn fixture_metadata_decodes() {
        let rule_set = Pubkey::new_unique();
        let fixture = PnftFixture::new(Some(rule_set)).unwrap();
        let info = fetch_metadata(&fixture.account_store(), &fixture.mint, None).unwrap();

        assert_eq!(info.metadata_address, fixture.metadata_address);
        assert_eq!(info.creators, fixture.creators);
        assert_eq!(info.rule_set, Some(rule_set));
        assert_eq!(
            info.metadata.token_standard,
            Some(TokenStandard::ProgrammableNonFungible)
        );
        let shares: u32 = info
            .metadata
            .data
            .creators
            .iter()
            .flatten()
            .map(|c| c.share as u32)
            .sum();
        assert_eq!(shares, 100);
    }

    #[test]
    fn fixture_without_rule_set() {
        let fixture = PnftFixture::new(None).unwrap();
        let info = fetch_metadata(&fixture.account_store(), &fixture.mint, None).unwrap();
        assert_eq!(info.rule_set, None);
    }
}
