//! Business-rule validation for mapped card records
//!
//! Validation is all-or-nothing: rules run in a fixed order (presence, PAN
//! length, Luhn checksum, expiry freshness, CVM table membership) and the
//! first failing rule short-circuits.

use chrono::{Datelike, NaiveDate};

use crate::card::CardRecord;
use crate::error::{CardError, CvmByte};

// CVM Results allow-lists, per EMV Book 4. Immutable; checked
// case-insensitively against the hex rendering of each sub-byte.
const CVM_METHODS: &[&str] = &[
    "00", "01", "02", "03", "04", "05", "06", "07", "1D", "1E", "1F", "20", "FF",
];
const CVM_CONDITIONS: &[&str] = &[
    "00", "01", "02", "03", "04", "05", "06", "07", "08", "09", "FF",
];
const CVM_RESULT_CODES: &[&str] = &["00", "01", "02", "03", "04", "05", "FF"];

/// Validate a mapped card record against payment-industry rules.
///
/// `today` anchors the expiry freshness check; a card expiring in the
/// current month is still valid (the day of month never matters, since
/// mapping normalizes it to 1).
///
/// # Errors
/// The first violated rule, as a [`CardError`].
pub fn validate(card: &CardRecord, today: NaiveDate) -> Result<(), CardError> {
    if card.pan.is_empty() {
        return Err(CardError::MissingField("PAN"));
    }
    let expiry = card.expiry.ok_or(CardError::MissingField("expiry date"))?;
    if card.cvm.is_empty() {
        return Err(CardError::MissingField("CVM"));
    }

    if card.pan.len() < 13 || card.pan.len() > 19 {
        return Err(CardError::InvalidPanLength(card.pan.len()));
    }

    if !luhn_check(&card.pan) {
        return Err(CardError::LuhnCheckFailed);
    }

    if expiry.year() < today.year()
        || (expiry.year() == today.year() && expiry.month() < today.month())
    {
        return Err(CardError::CardExpired { expiry, today });
    }

    validate_cvm(&card.cvm)
}

/// Standard mod-10 Luhn checksum over the PAN's characters, doubling every
/// second digit from the right. Any non-digit character fails the check
/// outright.
pub fn luhn_check(pan: &str) -> bool {
    let mut sum = 0u32;
    let mut double = false;

    for c in pan.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };

        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }

        sum += digit;
        double = !double;
    }

    sum % 10 == 0
}

fn validate_cvm(cvm: &str) -> Result<(), CardError> {
    if cvm.len() < 6 {
        return Err(CardError::CvmTooShort(cvm.len()));
    }

    let sub_bytes = [
        (CvmByte::Method, &cvm[0..2], CVM_METHODS),
        (CvmByte::Condition, &cvm[2..4], CVM_CONDITIONS),
        (CvmByte::ResultCode, &cvm[4..6], CVM_RESULT_CODES),
    ];

    for (which, value, table) in sub_bytes {
        if !table.iter().any(|allowed| allowed.eq_ignore_ascii_case(value)) {
            return Err(CardError::InvalidCvmByte {
                which,
                value: value.to_string(),
            });
        }
    }

    Ok(())
}
