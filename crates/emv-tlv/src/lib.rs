//! EMV TLV - BER-TLV decoding for EMV payment card data
//!
//! This crate decodes the flat BER-TLV buffers that chip-card terminals
//! produce: a tag/length codec, a decoder that walks a whole buffer into an
//! ordered sequence of records, and a small registry of well-known EMV tags.
//!
//! Decoding is purely computational: no I/O, no shared state, and every
//! structural problem in the input is a terminal [`TlvError`].

pub mod codec;
pub mod decoder;
pub mod error;
pub mod tags;

pub use decoder::{decode, TlvRecord};
pub use error::TlvError;
pub use tags::{tag_name, EmvTag};
