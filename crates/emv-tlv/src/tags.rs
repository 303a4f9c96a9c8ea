//! EMV tag registry
//!
//! Well-known tags from EMV Book 3 Annex A. The transaction processor only
//! interprets the PAN, expiry date and CVM results tags; the rest are here
//! so decoded records can be displayed with a meaningful name.

/// EMV Tag identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmvTag(pub &'static [u8]);

// Application metadata
pub const APPLICATION_LABEL: EmvTag = EmvTag(&[0x50]);
pub const APPLICATION_PAN: EmvTag = EmvTag(&[0x5A]);
pub const APPLICATION_EXPIRATION_DATE: EmvTag = EmvTag(&[0x5F, 0x24]);
pub const APPLICATION_EFFECTIVE_DATE: EmvTag = EmvTag(&[0x5F, 0x25]);
pub const APPLICATION_PAN_SEQUENCE_NUMBER: EmvTag = EmvTag(&[0x5F, 0x34]);

// Cardholder data
pub const CARDHOLDER_NAME: EmvTag = EmvTag(&[0x5F, 0x20]);
pub const TRACK_2_EQUIVALENT_DATA: EmvTag = EmvTag(&[0x57]);

// Issuer data
pub const ISSUER_COUNTRY_CODE: EmvTag = EmvTag(&[0x5F, 0x28]);

// Verification results
pub const CVM_RESULTS: EmvTag = EmvTag(&[0x9F, 0x34]);

/// Get a human-readable name for an EMV tag
pub fn tag_name(tag: &[u8]) -> &'static str {
    match tag {
        [0x50] => "Application Label",
        [0x57] => "Track 2 Equivalent Data",
        [0x5A] => "Application PAN",
        [0x5F, 0x20] => "Cardholder Name",
        [0x5F, 0x24] => "Application Expiration Date",
        [0x5F, 0x25] => "Application Effective Date",
        [0x5F, 0x28] => "Issuer Country Code",
        [0x5F, 0x34] => "Application PAN Sequence Number",
        [0x9F, 0x34] => "Cardholder Verification Method (CVM) Results",
        _ => "Unknown Tag",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_name_known() {
        assert_eq!(tag_name(APPLICATION_PAN.0), "Application PAN");
        assert_eq!(
            tag_name(CVM_RESULTS.0),
            "Cardholder Verification Method (CVM) Results"
        );
    }

    #[test]
    fn test_tag_name_unknown() {
        assert_eq!(tag_name(&[0x9F, 0x99]), "Unknown Tag");
    }
}
