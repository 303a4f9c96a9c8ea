//! EMV Transaction - field mapping, validation and authorization pipeline
//!
//! Maps decoded TLV records onto semantic card fields, validates them
//! against payment-industry rules (Luhn checksum, expiry freshness, CVM
//! result tables) and drives the validate-then-authorize pipeline. The
//! acquirer sits behind the [`Acquirer`] trait so the pipeline can be
//! exercised without a live service.

pub mod card;
pub mod error;
pub mod process;
pub mod validate;

pub use card::{mask_pan, CardRecord};
pub use error::{CardError, CvmByte, GatewayError, ProcessError};
pub use process::{
    process_transaction, Acquirer, AuthorizationRequest, AuthorizationResponse, TransactionResult,
};
pub use validate::{luhn_check, validate};
