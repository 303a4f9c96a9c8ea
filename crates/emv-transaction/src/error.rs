//! Mapping, validation and authorization errors
//!
//! None of these errors are retriable: each one is a definitive rejection of
//! the current input, and the caller is expected to report it and move on to
//! the next transaction.

use chrono::NaiveDate;
use thiserror::Error;

/// Which CVM sub-byte failed table membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvmByte {
    Method,
    Condition,
    ResultCode,
}

impl std::fmt::Display for CvmByte {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CvmByte::Method => "method",
            CvmByte::Condition => "condition",
            CvmByte::ResultCode => "result code",
        };
        f.write_str(name)
    }
}

/// Errors from mapping TLV records onto card fields or validating them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// A recognized expiry tag whose value is not a YYMM calendar date.
    #[error("invalid expiry encoding '{0}'")]
    InvalidExpiryEncoding(String),

    #[error("required field {0} is missing")]
    MissingField(&'static str),

    #[error("PAN must be between 13 and 19 digits, got {0}")]
    InvalidPanLength(usize),

    #[error("PAN failed Luhn algorithm validation")]
    LuhnCheckFailed,

    #[error(
        "card expired: expiry date {} is before current date {}",
        .expiry.format("%m/%Y"),
        .today.format("%m/%Y")
    )]
    CardExpired { expiry: NaiveDate, today: NaiveDate },

    #[error("CVM must be at least 6 hex characters, got {0}")]
    CvmTooShort(usize),

    /// A CVM sub-byte outside its fixed allow-list.
    #[error("invalid CVM {which} byte '{value}'")]
    InvalidCvmByte { which: CvmByte, value: String },
}

/// Errors from the acquirer authorization call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("failed to send authorization request: {0}")]
    Transport(String),

    #[error("acquirer returned unexpected status code: {0}")]
    Status(u16),

    #[error("failed to decode acquirer response: {0}")]
    Decode(String),
}

/// Error from one validate-then-authorize cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Validation(#[from] CardError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
