//! BER tag and length field codec
//!
//! Decodes a single tag or length field from the front of a byte slice.
//! Both functions are pure and deterministic; the caller advances its own
//! cursor by the returned byte count.

use crate::error::TlvError;

/// Low five bits all set in the first byte marks a multi-byte tag.
pub const MULTI_BYTE_TAG_MASK: u8 = 0x1F;

/// High bit set in a subsequent tag byte means the tag continues.
pub const TAG_CONTINUATION_BIT: u8 = 0x80;

/// Decode one BER tag from the front of `data`.
///
/// A tag is a single byte unless the low five bits of its first byte are all
/// set, in which case it extends with continuation bytes until the first byte
/// with the high bit clear.
///
/// # Returns
/// The tag bytes and the number of bytes consumed.
///
/// # Errors
/// [`TlvError::MalformedTag`] if `data` is empty or a multi-byte tag never
/// terminates before the buffer ends.
pub fn decode_tag(data: &[u8]) -> Result<(Vec<u8>, usize), TlvError> {
    let first = *data.first().ok_or(TlvError::MalformedTag)?;
    let mut tag = vec![first];
    let mut pos = 1;

    if first & MULTI_BYTE_TAG_MASK != MULTI_BYTE_TAG_MASK {
        return Ok((tag, pos));
    }

    loop {
        let byte = *data.get(pos).ok_or(TlvError::MalformedTag)?;
        tag.push(byte);
        pos += 1;

        // High bit clear marks the last byte of a multi-byte tag
        if byte & TAG_CONTINUATION_BIT == 0 {
            break;
        }
    }

    Ok((tag, pos))
}

/// Decode one BER length field from the front of `data`.
///
/// Short form: a single byte <= 0x7F is the length itself. Long form: 0x81 is
/// followed by one length byte, 0x82 by two big-endian length bytes. The
/// indefinite form (0x80) and forms above 0x82 are not used in EMV data and
/// are rejected.
///
/// # Returns
/// The length value and the number of bytes consumed.
///
/// # Errors
/// [`TlvError::MalformedLength`] if the buffer has too few bytes for the
/// indicated form, [`TlvError::UnsupportedLengthForm`] for any other form.
pub fn decode_length(data: &[u8]) -> Result<(usize, usize), TlvError> {
    let first = *data.first().ok_or(TlvError::MalformedLength)?;

    match first {
        0x00..=0x7F => Ok((first as usize, 1)),
        0x81 => {
            let byte = *data.get(1).ok_or(TlvError::MalformedLength)?;
            Ok((byte as usize, 2))
        }
        0x82 => {
            if data.len() < 3 {
                return Err(TlvError::MalformedLength);
            }
            let length = ((data[1] as usize) << 8) | data[2] as usize;
            Ok((length, 3))
        }
        other => Err(TlvError::UnsupportedLengthForm(other)),
    }
}
