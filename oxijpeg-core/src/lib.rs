//! # OxiJPEG Core
//!
//! Core components shared by the OxiJPEG decoding stages:
//!
//! - [`bitstream`]: MSB-first bit I/O for entropy-coded segments
//! - [`error`]: Error types for each stage and the umbrella [`OxiJpegError`]
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Tools                                               │
//! │     oxijpeg CLI                                         │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Stages                                              │
//! │     Huffman decode tree, 8x8 inverse DCT                │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     MsbBitReader/MsbBitWriter, error types              │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxijpeg_core::bitstream::{MsbBitReader, MsbBitWriter};
//!
//! let mut writer = MsbBitWriter::new();
//! writer.write_bits(0b010, 3).unwrap();
//! let data = writer.into_vec();
//! assert_eq!(data, vec![0b0101_1111]);
//!
//! let mut reader = MsbBitReader::new(&data);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b010);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{MsbBitReader, MsbBitWriter};
pub use error::{BitstreamError, BuildError, DctError, DecodeError, OxiJpegError, Result};
