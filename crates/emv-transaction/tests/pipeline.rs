//! End-to-end pipeline tests: hex buffer -> TLV decode -> field mapping ->
//! validation -> authorization against a mock acquirer.

use chrono::NaiveDate;
use emv_transaction::{
    process_transaction, Acquirer, AuthorizationRequest, CardError, CardRecord, GatewayError,
    ProcessError,
};

/// Mock acquirer with a fixed decision.
struct MockAcquirer {
    approve: bool,
}

impl Acquirer for MockAcquirer {
    fn authorize(&self, _request: &AuthorizationRequest) -> Result<bool, GatewayError> {
        Ok(self.approve)
    }
}

fn decode_card(hex_data: &str) -> Result<CardRecord, CardError> {
    let data = hex::decode(hex_data).unwrap();
    let records = emv_tlv::decode(&data).unwrap();
    CardRecord::from_records(&records)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

#[test]
fn test_full_transaction_approved() {
    let card = decode_card("5A0845395787636214865F2404251200009F340400000000").unwrap();

    assert_eq!(card.pan, "4539578763621486");
    assert_eq!(card.expiry, NaiveDate::from_ymd_opt(2025, 12, 1));
    assert_eq!(card.cvm, "00000000");

    let result = process_transaction(&card, today(), &MockAcquirer { approve: true }).unwrap();

    assert!(result.approved);
    assert_eq!(result.pan, "4539578763621486");
    assert_eq!(result.expiry.format("%m/%Y").to_string(), "12/2025");
}

#[test]
fn test_full_transaction_declined() {
    let card = decode_card("5A0845395787636214865F2404251200009F34031F0000").unwrap();

    let result = process_transaction(&card, today(), &MockAcquirer { approve: false }).unwrap();

    assert!(!result.approved);
    assert_eq!(result.message, "Transaction rejected by gateway");
}

#[test]
fn test_expired_card_rejected_before_authorization() {
    let card = decode_card("5A0845395787636214865F2404251200009F34031F0000").unwrap();

    let late = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
    let err = process_transaction(&card, late, &MockAcquirer { approve: true }).unwrap_err();

    assert!(matches!(
        err,
        ProcessError::Validation(CardError::CardExpired { .. })
    ));
}

#[test]
fn test_incomplete_card_data_rejected() {
    // PAN only: expiry and CVM never mapped
    let card = decode_card("5A084539578763621486").unwrap();

    let err = process_transaction(&card, today(), &MockAcquirer { approve: true }).unwrap_err();

    assert_eq!(
        err,
        ProcessError::Validation(CardError::MissingField("expiry date"))
    );
}

#[test]
fn test_structural_error_surfaces_before_mapping() {
    // Truncated buffer: tag and length with no value bytes
    let data = hex::decode("5A08").unwrap();
    assert!(emv_tlv::decode(&data).is_err());
}
