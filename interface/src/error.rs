#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum PnftInterfaceError {
    InvalidDiscriminator,
    InsufficientByteLength,
    InvalidInstructionData,
    InvalidAccountKey,
    InvalidAccountData,
}

impl From<PnftInterfaceError> for &'static str {
    fn from(value: PnftInterfaceError) -> Self {
        match value {
            PnftInterfaceError::InvalidDiscriminator => "Invalid instruction or account discriminator",
            PnftInterfaceError::InsufficientByteLength => "Not enough bytes passed",
            PnftInterfaceError::InvalidInstructionData => "Instruction data doesn't match the layout",
            PnftInterfaceError::InvalidAccountKey => "Account key byte doesn't match the account type",
            PnftInterfaceError::InvalidAccountData => "Account data doesn't match the layout",
        }
    }
}

impl core::fmt::Display for PnftInterfaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str((*self).into())
    }
}

impl std::error::Error for PnftInterfaceError {}

pub type PnftInterfaceResult<T> = Result<T, PnftInterfaceError>;
