use borsh::{
    BorshDeserialize,
    BorshSerialize,
};

use crate::error::{
    PnftInterfaceError,
    PnftInterfaceResult,
};

/// Length of the Anchor discriminator that prefixes instruction data and account data.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Writes `discriminator` followed by the borsh encoding of `args`.
pub fn pack_with_discriminator<T: BorshSerialize>(
    discriminator: [u8; DISCRIMINATOR_LEN],
    args: &T,
) -> Vec<u8> {
    let mut data = discriminator.to_vec();
    args.serialize(&mut data)
        .expect("Writing into a Vec should be infallible");
    data
}

/// Checks the leading discriminator and returns the remaining bytes.
pub fn strip_discriminator(
    discriminator: [u8; DISCRIMINATOR_LEN],
    data: &[u8],
) -> PnftInterfaceResult<&[u8]> {
    let (head, rest) = data
        .split_first_chunk::<DISCRIMINATOR_LEN>()
        .ok_or(PnftInterfaceError::InsufficientByteLength)?;
    if *head != discriminator {
        return Err(PnftInterfaceError::InvalidDiscriminator);
    }
    Ok(rest)
}

/// Checks the discriminator and decodes the rest of `data` as `T`. Trailing bytes are rejected.
pub fn unpack_with_discriminator<T: BorshDeserialize>(
    discriminator: [u8; DISCRIMINATOR_LEN],
    data: &[u8],
) -> PnftInterfaceResult<T> {
    let rest = strip_discriminator(discriminator, data)?;
    borsh::from_slice(rest).map_err(|_| PnftInterfaceError::InvalidInstructionData)
}

/// Reads one borsh value from the front of `buf`, advancing it.
pub fn read<T: BorshDeserialize>(buf: &mut &[u8]) -> PnftInterfaceResult<T> {
    T::deserialize(buf).map_err(|_| PnftInterfaceError::InvalidAccountData)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAG: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

    #[test]
    fn discriminator_prefixes_args() {
        let data = pack_with_discriminator(TAG, &(42u64, true));
        assert_eq!(&data[..8], &TAG);
        assert_eq!(&data[8..16], &42u64.to_le_bytes());
        assert_eq!(data[16], 1);
        assert_eq!(
            unpack_with_discriminator::<(u64, bool)>(TAG, &data),
            Ok((42, true))
        );
    }

    #[test]
    fn rejects_short_and_mismatched_data() {
        assert_eq!(
            strip_discriminator(TAG, &[1, 2, 3]),
            Err(PnftInterfaceError::InsufficientByteLength)
        );
        assert_eq!(
            strip_discriminator(TAG, &[0; 8]),
            Err(PnftInterfaceError::InvalidDiscriminator)
        );
        let mut data = pack_with_discriminator(TAG, &7u8);
        data.push(0);
        assert_eq!(
            unpack_with_discriminator::<u8>(TAG, &data),
            Err(PnftInterfaceError::InvalidInstructionData)
        );
    }
}
