use scaledui_serialization::{ReadError, WriteError};
use thiserror::Error;

pub const EXIT_CODE_MALFORMED_RECORD: u32 = 9;
pub const EXIT_CODE_NOT_OWNER: u32 = 73;
pub const EXIT_CODE_ZERO_MULTIPLIER: u32 = 80;
pub const EXIT_CODE_NO_SCHEDULED_CHANGE: u32 = 81;
pub const EXIT_CODE_CONFIG: u32 = 100;
pub const EXIT_CODE_STORAGE: u32 = 101;
/// Shared by every rejection that has no dedicated code.
pub const EXIT_CODE_GENERIC: u32 = 0xfffe;
pub const EXIT_CODE_UNKNOWN_OPERATION: u32 = 0xffff;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("unknown operation: {0:#010x}")]
    UnknownOperation(u32),
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    #[error("caller {0} is not the admin")]
    NotOwner(String),
    #[error("multiplier numerator and denominator must be non-zero")]
    ZeroMultiplier,
    #[error("no scheduled change to enact")]
    NoScheduledChange,
    #[error("scheduled change activates at {activation_time}, now is {now}")]
    NotYetDue { activation_time: u64, now: u64 },
    #[error("config error: {0}")]
    ConfigError(String),
    #[error("storage error: {0}")]
    StorageError(String),
}

impl ContractError {
    /// Numeric code reported to the caller of a rejected message.
    pub const fn exit_code(&self) -> u32 {
        match self {
            ContractError::UnknownOperation(_) => EXIT_CODE_UNKNOWN_OPERATION,
            ContractError::MalformedRecord(_) => EXIT_CODE_MALFORMED_RECORD,
            ContractError::NotOwner(_) => EXIT_CODE_NOT_OWNER,
            ContractError::ZeroMultiplier => EXIT_CODE_ZERO_MULTIPLIER,
            ContractError::NoScheduledChange => EXIT_CODE_NO_SCHEDULED_CHANGE,
            ContractError::NotYetDue { .. } => EXIT_CODE_GENERIC,
            ContractError::ConfigError(_) => EXIT_CODE_CONFIG,
            ContractError::StorageError(_) => EXIT_CODE_STORAGE,
        }
    }
}

impl From<ReadError> for ContractError {
    fn from(e: ReadError) -> Self {
        ContractError::MalformedRecord(e.to_string())
    }
}

impl From<WriteError> for ContractError {
    fn from(e: WriteError) -> Self {
        ContractError::MalformedRecord(format!("failed to encode record: {}", e))
    }
}
