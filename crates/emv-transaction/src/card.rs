//! Semantic card record mapped from decoded TLV data

use chrono::NaiveDate;
use emv_tlv::TlvRecord;

use crate::error::CardError;

/// Card fields extracted from a decoded TLV buffer.
///
/// The PAN and CVM fields hold the uppercase hex rendering of the raw value
/// bytes, which coincides with the real digits for BCD-encoded card data.
/// Fields absent from the input stay at their zero value; the validator
/// reports them as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardRecord {
    /// Primary Account Number (tag 5A).
    pub pan: String,
    /// Expiry date (tag 5F24), day normalized to the 1st.
    pub expiry: Option<NaiveDate>,
    /// CVM Results (tag 9F34): method, condition and result code bytes.
    pub cvm: String,
}

impl CardRecord {
    /// Map decoded TLV records onto card fields.
    ///
    /// Records are walked in decode order and every recognized tag
    /// overwrites the field it maps to, so the last occurrence of a
    /// duplicated tag wins. Unrecognized tags are skipped without error.
    ///
    /// # Errors
    /// [`CardError::InvalidExpiryEncoding`] if a 5F24 value is too short or
    /// does not form a calendar date.
    pub fn from_records(records: &[TlvRecord]) -> Result<Self, CardError> {
        let mut card = CardRecord::default();

        for record in records {
            match record.tag.as_slice() {
                [0x5A] => card.pan = record.value_hex(),
                [0x5F, 0x24] => card.expiry = Some(parse_expiry(&record.value_hex())?),
                [0x9F, 0x34] => card.cvm = record.value_hex(),
                _ => {}
            }
        }

        Ok(card)
    }
}

/// Parse the hex rendering of a 5F24 value (BCD `YYMMDD`) into a date.
///
/// Only `YY` and `MM` are significant; the day is normalized to 1 and the
/// year to `2000 + YY`. The hex characters must themselves be decimal
/// digits, which holds for any properly BCD-encoded date.
fn parse_expiry(value_hex: &str) -> Result<NaiveDate, CardError> {
    let invalid = || CardError::InvalidExpiryEncoding(value_hex.to_string());

    if value_hex.len() < 4 {
        return Err(invalid());
    }

    let yy: i32 = value_hex[0..2].parse().map_err(|_| invalid())?;
    let mm: u32 = value_hex[2..4].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(2000 + yy, mm, 1).ok_or_else(invalid)
}

/// Mask a PAN for log output: only the first six and last four characters
/// survive.
pub fn mask_pan(pan: &str) -> String {
    if pan.len() < 10 {
        return pan.to_string();
    }
    format!("{}******{}", &pan[..6], &pan[pan.len() - 4..])
}
