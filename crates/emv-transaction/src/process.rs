//! Transaction pipeline: validate, then authorize
//!
//! One synchronous pass per transaction. A validation failure rejects the
//! input before the acquirer is ever contacted; an authorization decline is
//! a normal outcome, not an error.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::card::CardRecord;
use crate::error::{CardError, GatewayError, ProcessError};
use crate::validate::validate;

/// Authorization request sent to the acquirer's `/authorize` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationRequest {
    pub pan: String,
    pub data_validade: NaiveDate,
    pub cvm: String,
}

/// Authorization decision returned by the acquirer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationResponse {
    pub approved: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Acquirer-side authorization of a validated transaction.
pub trait Acquirer {
    /// Ask the acquirer to approve or decline the transaction.
    ///
    /// # Errors
    /// [`GatewayError`] when the acquirer cannot be reached or answers with
    /// something other than a decision.
    fn authorize(&self, request: &AuthorizationRequest) -> Result<bool, GatewayError>;
}

/// Outcome of one decode-validate-authorize cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResult {
    pub approved: bool,
    pub message: String,
    pub pan: String,
    pub expiry: NaiveDate,
    pub cvm: String,
    pub timestamp: DateTime<Utc>,
}

/// Validate `card` and, if it passes, forward it for authorization.
pub fn process_transaction(
    card: &CardRecord,
    today: NaiveDate,
    acquirer: &impl Acquirer,
) -> Result<TransactionResult, ProcessError> {
    validate(card, today)?;

    // validate guarantees the expiry is present
    let expiry = card.expiry.ok_or(CardError::MissingField("expiry date"))?;

    let request = AuthorizationRequest {
        pan: card.pan.clone(),
        data_validade: expiry,
        cvm: card.cvm.clone(),
    };
    let approved = acquirer.authorize(&request)?;

    let message = if approved {
        "Transaction authorized successfully"
    } else {
        "Transaction rejected by gateway"
    };

    Ok(TransactionResult {
        approved,
        message: message.to_string(),
        pan: card.pan.clone(),
        expiry,
        cvm: card.cvm.clone(),
        timestamp: Utc::now(),
    })
}
