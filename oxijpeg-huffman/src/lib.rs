//! # OxiJPEG Huffman
//!
//! Pure Rust Huffman decode tree for JPEG-style entropy-coded data.
//!
//! A table arrives as a `BITS` histogram (how many codes of each length
//! from 1 to 16) plus the symbols in code order. [`HuffmanDecoder::build`]
//! expands it into a binary tree, and [`HuffmanDecoder::move_bit`] walks
//! that tree one bit per call, yielding a symbol whenever a leaf is reached.
//!
//! The decoder does not read bytes itself. Callers feed it bits from
//! whatever framing they use, for example an
//! [`MsbBitReader`](oxijpeg_core::MsbBitReader).
//!
//! ## Example
//!
//! ```rust
//! use oxijpeg_core::MsbBitReader;
//! use oxijpeg_huffman::{HuffmanDecoder, HuffmanTable};
//!
//! let mut decoder = HuffmanDecoder::from_table(&HuffmanTable::dc_luminance()).unwrap();
//!
//! // 00 -> 0, 010 -> 1, 1110 -> 6, then 1-bit padding.
//! let data = [0b0001_0111, 0b0111_1111];
//! let symbols = decoder.decode_bits(MsbBitReader::new(&data).take(9)).unwrap();
//! assert_eq!(symbols, vec![0, 1, 6]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod decoder;
pub mod tables;
mod tree;

/// Longest supported code length, and the most length buckets a table may have.
pub const MAX_CODE_LENGTH: usize = 16;

// Re-exports
pub use decoder::{CodeEntry, HuffmanDecoder};
pub use oxijpeg_core::{BuildError, DecodeError};
pub use tables::HuffmanTable;
