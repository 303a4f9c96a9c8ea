//! TLV decode errors

use thiserror::Error;

/// Errors produced while decoding a BER-TLV buffer.
///
/// Every variant is terminal for the current buffer: the decoder does not
/// attempt recovery or partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TlvError {
    /// The buffer is empty or ends before a multi-byte tag terminates.
    #[error("malformed tag: buffer ended inside a tag field")]
    MalformedTag,

    /// The buffer ends before the length field's indicated form completes.
    #[error("malformed length: buffer ended inside a length field")]
    MalformedLength,

    /// The first length byte is 0x80 (indefinite form) or above 0x82.
    #[error("unsupported length form 0x{0:02X}")]
    UnsupportedLengthForm(u8),

    /// A declared value length runs past the end of the buffer.
    #[error("value length {length} exceeds buffer at position {offset} (total: {total})")]
    ValueOverrun {
        offset: usize,
        length: usize,
        total: usize,
    },
}
