//! Error types for OxiJPEG operations.
//!
//! Each stage has its own narrow error enum so callers can match on exactly
//! the failures a call can produce. [`OxiJpegError`] gathers them for code
//! that drives several stages at once (the CLI, container readers).

use std::io;
use thiserror::Error;

/// Errors raised while expanding a code-length table into a decode tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// More length buckets were supplied than the maximum code length.
    #[error("Huffman table too large: {buckets} length buckets, maximum is {max}")]
    TableTooLarge {
        /// Number of buckets supplied.
        buckets: usize,
        /// Maximum supported code length.
        max: usize,
    },

    /// The length histogram needs more symbols than were supplied.
    #[error("Huffman table short of values: leaf {needed} requested, {available} values supplied")]
    TooFewValues {
        /// One-based index of the leaf that could not be assigned.
        needed: usize,
        /// Number of values supplied.
        available: usize,
    },

    /// The length histogram cannot be realized as a binary tree.
    #[error("Huffman table cannot be built: no free slot for a {length}-bit code")]
    Infeasible {
        /// Code length that could not be placed.
        length: usize,
    },
}

/// Errors raised while walking a decode tree one bit at a time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The bit sequence is not a prefix of any code in the table.
    #[error("Invalid Huffman code after {bits} bits")]
    InvalidCode {
        /// Bits consumed for the current code word, including the failing one.
        bits: usize,
    },

    /// A previous bit was rejected and the cursor has not been reset.
    #[error("Huffman decoder faulted; reset required before decoding")]
    Faulted,
}

/// Errors raised by the inverse DCT stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DctError {
    /// Buffers do not both hold `width * width` coefficients.
    #[error("Invalid DCT buffer sizes: input {input}, output {output}, expected {expected}")]
    InvalidSize {
        /// Input buffer length.
        input: usize,
        /// Output buffer length.
        output: usize,
        /// Required length (`width * width`).
        expected: usize,
    },

    /// Block width other than the supported one.
    #[error("Invalid DCT width: {width} (must be {expected})")]
    InvalidWidth {
        /// Width requested.
        width: usize,
        /// The only supported width.
        expected: usize,
    },
}

/// Errors raised by the MSB-first bit reader/writer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitstreamError {
    /// Ran out of input.
    #[error("Unexpected end of data at bit position {position}")]
    UnexpectedEof {
        /// Bit position where EOF occurred.
        position: u64,
    },

    /// Invalid bit width specified.
    #[error("Invalid bit width: {0} (must be 1-16)")]
    InvalidBitWidth(u8),
}

/// The main error type for OxiJPEG operations.
#[derive(Debug, Error)]
pub enum OxiJpegError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Huffman table could not be built.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Bitstream did not match the Huffman table.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Inverse DCT rejected its buffers.
    #[error(transparent)]
    Dct(#[from] DctError),

    /// Bit-level I/O failed.
    #[error(transparent)]
    Bitstream(#[from] BitstreamError),

    /// Malformed caller input (table text, bit strings).
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the problem.
        message: String,
    },
}

/// Result type alias for OxiJPEG operations.
pub type Result<T> = std::result::Result<T, OxiJpegError>;

impl OxiJpegError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BuildError::TableTooLarge {
            buckets: 17,
            max: 16,
        };
        assert!(err.to_string().contains("17"));

        let err = DecodeError::InvalidCode { bits: 3 };
        assert!(err.to_string().contains("Invalid Huffman code"));

        let err = DctError::InvalidWidth {
            width: 4,
            expected: 8,
        };
        assert!(err.to_string().contains("must be 8"));
    }

    #[test]
    fn test_stage_error_conversion() {
        let err: OxiJpegError = BuildError::Infeasible { length: 1 }.into();
        assert!(matches!(err, OxiJpegError::Build(BuildError::Infeasible { length: 1 })));

        let err: OxiJpegError = DecodeError::Faulted.into();
        assert_eq!(err.to_string(), DecodeError::Faulted.to_string());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: OxiJpegError = io_err.into();
        assert!(matches!(err, OxiJpegError::Io(_)));
    }
}
