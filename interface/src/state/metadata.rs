//! Read-only view of the token-metadata `Metadata` account.
//!
//! Only the fields needed to build pNFT instructions are interpreted (creators and the
//! programmable config), but the whole layout is decoded so the trailing fields land at the right
//! offsets.

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    error::{
        PnftInterfaceError,
        PnftInterfaceResult,
    },
    pack::read,
};

/// `Key::MetadataV1`.
pub const METADATA_V1_KEY: u8 = 4;

/// Size token-metadata allocates for a metadata account.
pub const MAX_METADATA_LEN: usize = 679;

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Creator {
    pub address: [u8; 32],
    pub verified: bool,
    /// Percentage, not basis points.
    pub share: u8,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Data {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Option<Vec<Creator>>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStandard {
    NonFungible,
    FungibleAsset,
    Fungible,
    NonFungibleEdition,
    ProgrammableNonFungible,
    ProgrammableNonFungibleEdition,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Collection {
    pub verified: bool,
    pub key: [u8; 32],
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UseMethod {
    Burn,
    Multiple,
    Single,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Uses {
    pub use_method: UseMethod,
    pub remaining: u64,
    pub total: u64,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum CollectionDetails {
    V1 { size: u64 },
    V2 { padding: [u8; 8] },
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum ProgrammableConfig {
    V1 { rule_set: Option<[u8; 32]> },
}

#[derive(BorshSerialize, Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub key: u8,
    pub update_authority: [u8; 32],
    pub mint: [u8; 32],
    pub data: Data,
    pub primary_sale_happened: bool,
    pub is_mutable: bool,
    pub edition_nonce: Option<u8>,
    pub token_standard: Option<TokenStandard>,
    pub collection: Option<Collection>,
    pub uses: Option<Uses>,
    pub collection_details: Option<CollectionDetails>,
    pub programmable_config: Option<ProgrammableConfig>,
}

impl Metadata {
    /// Decodes a metadata account.
    ///
    /// Fields after `edition_nonce` were appended in later token-metadata versions, so older
    /// accounts may end before them. Once one trailing field fails to decode, it and every field
    /// after it read as `None`.
    pub fn try_from_account_data(data: &[u8]) -> PnftInterfaceResult<Self> {
        let buf = &mut &data[..];

        let key: u8 = read(buf)?;
        if key != METADATA_V1_KEY {
            return Err(PnftInterfaceError::InvalidAccountKey);
        }

        let update_authority = read(buf)?;
        let mint = read(buf)?;
        let data = read(buf)?;
        let primary_sale_happened = read(buf)?;
        let is_mutable = read(buf)?;
        let edition_nonce = read(buf)?;

        let mut trailing = Trailing { buf, done: false };
        let token_standard = trailing.next();
        let collection = trailing.next();
        let uses = trailing.next();
        let collection_details = trailing.next();
        let programmable_config = trailing.next();

        Ok(Self {
            key,
            update_authority,
            mint,
            data,
            primary_sale_happened,
            is_mutable,
            edition_nonce,
            token_standard,
            collection,
            uses,
            collection_details,
            programmable_config,
        })
    }

    pub fn mint(&self) -> Pubkey {
        Pubkey::new_from_array(self.mint)
    }

    /// Creator addresses in metadata order. Empty when the asset has no creators.
    pub fn creator_addresses(&self) -> Vec<Pubkey> {
        self.data
            .creators
            .iter()
            .flatten()
            .map(|creator| Pubkey::new_from_array(creator.address))
            .collect()
    }

    /// The rule set named by the programmable config, if any.
    pub fn rule_set(&self) -> Option<Pubkey> {
        match self.programmable_config {
            Some(ProgrammableConfig::V1 {
                rule_set: Some(rule_set),
            }) => Some(Pubkey::new_from_array(rule_set)),
            _ => None,
        }
    }

    /// Packs the metadata the way token-metadata stores it, zero padded to [`MAX_METADATA_LEN`].
    pub fn to_account_data(&self) -> Vec<u8> {
        let mut data = borsh::to_vec(self).expect("Writing into a Vec should be infallible");
        if data.len() < MAX_METADATA_LEN {
            data.resize(MAX_METADATA_LEN, 0);
        }
        data
    }
}

struct Trailing<'a, 'b> {
    buf: &'a mut &'b [u8],
    done: bool,
}

impl Trailing<'_, '_> {
    fn next<T: BorshDeserialize>(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        match Option::<T>::deserialize(&mut *self.buf) {
            Ok(value) => value,
            Err(_) => {
                self.done = true;
                None
            }
        }
    }
}
