//! Builds the authorization payload a pNFT instruction carries.

use std::collections::HashSet;

use pnft_interface::{
    instructions::PnftMethod,
    seeds::LISTING_SEED,
    state::authorization::{
        AuthorizationData,
        PayloadType,
        TaggedPayload,
        SOURCE_SEEDS_KEY,
    },
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    error::PnftClientError,
    pda::pubkey_from_slice,
};

/// What the caller wants to prove to the asset's rule set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthorizationContext {
    /// No payload. Transfer and list send `None`.
    #[default]
    None,
    /// The source token account is the escrow of the listing for `mint`, i.e. owned by the PDA
    /// `[mint, "listings"]`. Only meaningful for buy.
    ListingSource { mint: Pubkey },
    /// Caller supplied entries, sent in the given order.
    Custom(Vec<(String, PayloadType)>),
}

/// Encodes `context` for `method`.
pub fn encode_authorization(
    context: &AuthorizationContext,
    method: PnftMethod,
) -> anyhow::Result<Option<AuthorizationData>> {
    match context {
        AuthorizationContext::None => Ok(None),
        AuthorizationContext::ListingSource { mint } => {
            if method != PnftMethod::BuyPnft {
                return Err(PnftClientError::UnsupportedAuthorization(method).into());
            }
            let mint_bytes = mint.to_bytes();
            Ok(Some(AuthorizationData {
                payload: vec![TaggedPayload {
                    name: SOURCE_SEEDS_KEY.to_string(),
                    payload: PayloadType::seeds([&mint_bytes[..], LISTING_SEED]),
                }],
            }))
        }
        AuthorizationContext::Custom(entries) => {
            let mut seen = HashSet::with_capacity(entries.len());
            let payload = entries
                .iter()
                .map(|(name, payload)| {
                    if !seen.insert(name.as_str()) {
                        return Err(PnftClientError::DuplicatePayloadName(name.clone()));
                    }
                    Ok(TaggedPayload {
                        name: name.clone(),
                        payload: payload.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(AuthorizationData { payload }))
        }
    }
}

/// The mint named by a `SourceSeeds` entry of the form `[mint, "listings"]`, if `data` has one.
///
/// Fails with a derivation error when the entry isn't a listing's seeds or its first seed isn't a
/// 32 byte address.
pub fn listing_source_mint(data: &AuthorizationData) -> anyhow::Result<Option<Pubkey>> {
    let Some(payload) = data.get(SOURCE_SEEDS_KEY) else {
        return Ok(None);
    };
    match payload.as_seeds() {
        Some([mint, seed]) if seed.as_slice() == LISTING_SEED => pubkey_from_slice(mint).map(Some),
        _ => Err(PnftClientError::Derivation(format!(
            "`{SOURCE_SEEDS_KEY}` isn't a listing's seeds"
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_encodes_to_none() {
        for method in [
            PnftMethod::TransferPnft,
            PnftMethod::ListPnft,
            PnftMethod::BuyPnft,
        ] {
            assert_eq!(
                encode_authorization(&AuthorizationContext::None, method).unwrap(),
                None
            );
        }
    }

    #[test]
    fn listing_source_seeds() {
        let mint = Pubkey::new_unique();
        let data = encode_authorization(
            &AuthorizationContext::ListingSource { mint },
            PnftMethod::BuyPnft,
        )
        .unwrap()
        .unwrap();

        assert_eq!(data.payload.len(), 1);
        assert_eq!(data.payload[0].name, "SourceSeeds");
        assert_eq!(
            data.payload[0].payload.as_seeds().unwrap(),
            [mint.to_bytes().to_vec(), b"listings".to_vec()]
        );
    }

    #[test]
    fn listing_source_only_for_buy() {
        let context = AuthorizationContext::ListingSource {
            mint: Pubkey::new_unique(),
        };
        let err = encode_authorization(&context, PnftMethod::TransferPnft).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PnftClientError>(),
            Some(&PnftClientError::UnsupportedAuthorization(
                PnftMethod::TransferPnft
            ))
        );
    }

    #[test]
    fn custom_keeps_order_and_rejects_duplicates() {
        let target = Pubkey::new_unique();
        let context = AuthorizationContext::Custom(vec![
            ("Target".into(), PayloadType::pubkey(&target)),
            ("Amount".into(), PayloadType::Number(1)),
        ]);
        let data = encode_authorization(&context, PnftMethod::TransferPnft)
            .unwrap()
            .unwrap();
        assert_eq!(data.names().collect::<Vec<_>>(), ["Target", "Amount"]);
        assert_eq!(data.get("Target"), Some(&PayloadType::Pubkey(target.to_bytes())));

        let context = AuthorizationContext::Custom(vec![
            ("Amount".into(), PayloadType::Number(1)),
            ("Amount".into(), PayloadType::Number(2)),
        ]);
        let err = encode_authorization(&context, PnftMethod::ListPnft).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PnftClientError>(),
            Some(&PnftClientError::DuplicatePayloadName("Amount".into()))
        );
    }

    #[test]
    fn listing_source_mint_round_trip() {
        let mint = Pubkey::new_unique();
        let data = encode_authorization(
            &AuthorizationContext::ListingSource { mint },
            PnftMethod::BuyPnft,
        )
        .unwrap()
        .unwrap();
        assert_eq!(listing_source_mint(&data).unwrap(), Some(mint));
        assert_eq!(
            listing_source_mint(&AuthorizationData::default()).unwrap(),
            None
        );
    }

    #[test]
    fn listing_source_mint_checks_seed_length() {
        let context = AuthorizationContext::Custom(vec![(
            SOURCE_SEEDS_KEY.into(),
            PayloadType::seeds([&[1u8; 31][..], LISTING_SEED]),
        )]);
        let data = encode_authorization(&context, PnftMethod::BuyPnft)
            .unwrap()
            .unwrap();
        let err = listing_source_mint(&data).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PnftClientError>(),
            Some(PnftClientError::Derivation(_))
        ));
    }
}
