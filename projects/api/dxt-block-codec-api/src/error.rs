//! Error types for block and image codec operations.

use crate::format::BlockFormat;
use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding blocks and images.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The image dimensions cannot be used for the requested operation.
    #[error("Invalid image dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
        /// Why the dimensions were rejected
        reason: &'static str,
    },

    /// The pixel buffer does not hold exactly the number of bytes the dimensions call for.
    #[error("Invalid pixel data length: expected {expected} bytes, got {actual} bytes")]
    InvalidPixelCount {
        /// Required length in bytes
        expected: usize,
        /// Provided length in bytes
        actual: usize,
    },

    /// A single block was not exactly one block long.
    #[error("Invalid {format} block length: expected {expected} bytes, got {actual} bytes")]
    InvalidBlockLength {
        /// Format the block was decoded as
        format: BlockFormat,
        /// Block size of the format
        expected: usize,
        /// Provided length in bytes
        actual: usize,
    },

    /// Compressed input ended before all blocks of the image were read.
    #[error("Truncated input: need {expected} bytes, got {actual} bytes")]
    TruncatedInput {
        /// Required length in bytes
        expected: usize,
        /// Provided length in bytes
        actual: usize,
    },

    /// The requested format name is not one of the supported formats.
    #[error("Unsupported block format: {0:?}")]
    UnsupportedFormat(String),

    /// Reading or writing a stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
