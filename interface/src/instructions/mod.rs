use crate::{
    error::{
        PnftInterfaceError,
        PnftInterfaceResult,
    },
    pack::DISCRIMINATOR_LEN,
};

pub mod buy_pnft;
pub mod list_pnft;
pub mod transfer_pnft;

pub use buy_pnft::*;
pub use list_pnft::*;
pub use transfer_pnft::*;

/// The `pnft_transfer` program's methods. Displays as the on-chain method name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum PnftMethod {
    TransferPnft,
    ListPnft,
    BuyPnft,
}

impl PnftMethod {
    /// The Anchor instruction discriminator, `sha256("global:<method name>")[..8]`.
    pub const fn discriminator(&self) -> [u8; DISCRIMINATOR_LEN] {
        match self {
            Self::TransferPnft => [152, 40, 227, 20, 253, 202, 15, 205],
            Self::ListPnft => [51, 174, 139, 27, 151, 226, 10, 126],
            Self::BuyPnft => [1, 7, 235, 162, 77, 99, 221, 169],
        }
    }

    /// Identifies the method from the leading discriminator of instruction data.
    pub fn try_from_instruction_data(data: &[u8]) -> PnftInterfaceResult<Self> {
        let head = data
            .first_chunk::<DISCRIMINATOR_LEN>()
            .ok_or(PnftInterfaceError::InsufficientByteLength)?;
        [Self::TransferPnft, Self::ListPnft, Self::BuyPnft]
            .into_iter()
            .find(|method| method.discriminator() == *head)
            .ok_or(PnftInterfaceError::InvalidDiscriminator)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn method_from_discriminator_exhaustive() {
        for method in PnftMethod::iter() {
            let mut data = method.discriminator().to_vec();
            data.extend([0, 1, 2]);
            assert_eq!(PnftMethod::try_from_instruction_data(&data), Ok(method));
        }
        assert_eq!(
            PnftMethod::try_from_instruction_data(&[0; 8]),
            Err(PnftInterfaceError::InvalidDiscriminator)
        );
        assert_eq!(
            PnftMethod::try_from_instruction_data(&[1, 7]),
            Err(PnftInterfaceError::InsufficientByteLength)
        );
    }

    #[test]
    fn method_names() {
        assert_eq!(PnftMethod::TransferPnft.to_string(), "transfer_pnft");
        assert_eq!(PnftMethod::ListPnft.to_string(), "list_pnft");
        assert_eq!(PnftMethod::BuyPnft.to_string(), "buy_pnft");
    }
}
