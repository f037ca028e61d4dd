//! Authorization payload passed to `transfer_pnft`, `list_pnft` and, optionally, `buy_pnft`.
//!
//! The program rebuilds a token-auth-rules `Payload` map from this list, so the same borsh schema
//! is used when encoding on the client and decoding in tests.

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_sdk::pubkey::Pubkey;

/// Name of the payload entry proving that the source token account is owned by a PDA.
pub const SOURCE_SEEDS_KEY: &str = "SourceSeeds";

/// `{ payload: [{ name, payload }] }`. Entry order is preserved on the wire.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationData {
    pub payload: Vec<TaggedPayload>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TaggedPayload {
    pub name: String,
    pub payload: PayloadType,
}

/// Variants mirror token-auth-rules' `PayloadType`; the borsh tag is the variant index.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum PayloadType {
    /// A plain public key.
    Pubkey([u8; 32]),
    /// PDA derivation seeds.
    Seeds(SeedsVec),
    /// A merkle proof.
    MerkleProof(ProofInfo),
    /// A plain `u64`, used for amounts.
    Number(u64),
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct SeedsVec {
    pub seeds: Vec<Vec<u8>>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProofInfo {
    pub proof: Vec<[u8; 32]>,
}

impl PayloadType {
    pub fn pubkey(key: &Pubkey) -> Self {
        Self::Pubkey(key.to_bytes())
    }

    pub fn seeds<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        Self::Seeds(SeedsVec {
            seeds: seeds.into_iter().map(|s| s.as_ref().to_vec()).collect(),
        })
    }

    pub fn as_seeds(&self) -> Option<&[Vec<u8>]> {
        match self {
            Self::Seeds(SeedsVec { seeds }) => Some(seeds.as_slice()),
            _ => None,
        }
    }
}

impl AuthorizationData {
    pub fn get(&self, name: &str) -> Option<&PayloadType> {
        self.payload
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.payload)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.payload.iter().map(|entry| entry.name.as_str())
    }
}
