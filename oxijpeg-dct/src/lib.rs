//! # OxiJPEG DCT
//!
//! Pure Rust 8x8 inverse discrete cosine transform for JPEG blocks.
//!
//! This stage runs after entropy decoding and dequantization: it takes a
//! row-major block of 64 coefficients and produces 64 spatial samples
//! (before level shift). It shares no state with the Huffman stage.
//!
//! ## Example
//!
//! ```rust
//! use oxijpeg_dct::inverse_dct;
//!
//! let mut coefficients = [0.0; 64];
//! coefficients[0] = -64.0;
//! let mut samples = [0.0; 64];
//!
//! inverse_dct(&mut coefficients, &mut samples).unwrap();
//! assert!((samples[27] + 8.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod idct;

// Re-exports
pub use idct::{BOUNDARY_SCALE, DCT_NORMALIZE, DCT_WIDTH, DctCalculator, inverse_dct};
pub use oxijpeg_core::DctError;
