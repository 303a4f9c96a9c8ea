//! TLV decoder
//!
//! Drives the tag/length codec across a whole buffer, producing an ordered
//! sequence of raw records. Structural malformation surfaces as a
//! [`TlvError`]; semantic interpretation of tags is left to the caller.

use crate::codec::{decode_length, decode_tag};
use crate::error::TlvError;

/// A single decoded Tag-Length-Value record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvRecord {
    /// Raw tag bytes (1 or more).
    pub tag: Vec<u8>,
    /// Declared value length; always equals `value.len()`.
    pub length: usize,
    /// Raw value bytes.
    pub value: Vec<u8>,
}

impl TlvRecord {
    /// Tag bytes as an uppercase hex string (e.g. "5F24").
    pub fn tag_hex(&self) -> String {
        hex::encode_upper(&self.tag)
    }

    /// Value bytes as an uppercase hex string.
    pub fn value_hex(&self) -> String {
        hex::encode_upper(&self.value)
    }
}

/// Decode a flat BER-TLV buffer into an ordered sequence of records.
///
/// The cursor starts at offset 0 and must land exactly on the buffer end;
/// a buffer that ends mid-tag or mid-length fails with the codec's error,
/// and a value that runs past the end fails with
/// [`TlvError::ValueOverrun`]. An empty buffer decodes to an empty
/// sequence. Duplicate tags are kept in input order; callers that map tags
/// onto fields apply their own overwrite policy.
pub fn decode(data: &[u8]) -> Result<Vec<TlvRecord>, TlvError> {
    let mut records = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        let (tag, used) = decode_tag(&data[pos..])?;
        pos += used;

        let (length, used) = decode_length(&data[pos..])?;
        pos += used;

        if pos + length > data.len() {
            return Err(TlvError::ValueOverrun {
                offset: pos,
                length,
                total: data.len(),
            });
        }

        let value = data[pos..pos + length].to_vec();
        pos += length;

        records.push(TlvRecord { tag, length, value });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_bytes(s: &str) -> Vec<u8> {
        hex::decode(s).unwrap()
    }

    #[test]
    fn test_decode_card_data() {
        // PAN, expiry date and CVM results in one buffer
        let data = hex_bytes("5A0812345678901234565F2404251200009F340442000000");
        let records = decode(&data).unwrap();

        assert_eq!(records.len(), 3);

        assert_eq!(records[0].tag, hex_bytes("5A"));
        assert_eq!(records[0].length, 8);
        assert_eq!(records[0].value, hex_bytes("1234567890123456"));

        assert_eq!(records[1].tag, hex_bytes("5F24"));
        assert_eq!(records[1].length, 4);
        assert_eq!(records[1].value, hex_bytes("25120000"));

        assert_eq!(records[2].tag, hex_bytes("9F34"));
        assert_eq!(records[2].length, 4);
        assert_eq!(records[2].value, hex_bytes("42000000"));
    }

    #[test]
    fn test_decode_single_record() {
        let records = decode(&hex_bytes("5A084539578763621486")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tag_hex(), "5A");
        assert_eq!(records[0].value_hex(), "4539578763621486");
    }

    #[test]
    fn test_decode_empty_buffer() {
        assert_eq!(decode(&[]).unwrap(), Vec::new());
    }

    #[test]
    fn test_decode_value_overrun() {
        // Tag and length but no value bytes
        assert_eq!(
            decode(&hex_bytes("5A08")),
            Err(TlvError::ValueOverrun {
                offset: 2,
                length: 8,
                total: 2,
            })
        );
    }

    #[test]
    fn test_decode_tag_only() {
        assert_eq!(decode(&hex_bytes("5A")), Err(TlvError::MalformedLength));
    }

    #[test]
    fn test_decode_truncated_tag() {
        // Valid record followed by a dangling multi-byte tag opener
        assert_eq!(
            decode(&[0x5A, 0x01, 0x11, 0x9F]),
            Err(TlvError::MalformedTag)
        );
    }

    #[test]
    fn test_decode_zero_length_value() {
        let records = decode(&[0x5A, 0x00]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].length, 0);
        assert!(records[0].value.is_empty());
    }

    #[test]
    fn test_duplicate_tags_preserved_in_order() {
        let records = decode(&[0x5A, 0x01, 0x11, 0x5A, 0x01, 0x22]).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].value, vec![0x11]);
        assert_eq!(records[1].value, vec![0x22]);
    }

    #[test]
    fn test_decode_is_idempotent() {
        let data = hex_bytes("5A0812345678901234565F2404251200009F340442000000");
        assert_eq!(decode(&data).unwrap(), decode(&data).unwrap());
    }
}
