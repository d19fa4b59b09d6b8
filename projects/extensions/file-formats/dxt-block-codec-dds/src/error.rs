//! Errors raised while reading or writing DDS containers.

use crate::dds::parse_dds::DdsFormat;
use dxt_block_codec_api::CodecError;
use thiserror::Error;

/// Result type for DDS operations
pub type DdsResult<T> = Result<T, DdsError>;

/// Errors that can occur while reading or writing a DDS file.
#[derive(Debug, Error)]
pub enum DdsError {
    /// The data does not start with a DDS magic followed by a full header.
    #[error("Not a DDS file")]
    NotADds,

    /// The `dwSize` header field is not 124.
    #[error("Invalid DDS header size: {0}")]
    InvalidHeaderSize(u32),

    /// A FourCC pixel format this crate does not understand.
    #[error("Unsupported FourCC: {}", String::from_utf8_lossy(.0))]
    UnsupportedFourCc([u8; 4]),

    /// A DX10 header with a DXGI format this crate does not understand.
    #[error("Unsupported DXGI format: {0}")]
    UnsupportedDxgiFormat(u32),

    /// An uncompressed pixel format whose bit count and masks match none of the known layouts.
    #[error(
        "Unsupported pixel format: flags {flags:#X}, {bit_count} bits, masks R {:#X} G {:#X} B {:#X} A {:#X}",
        .masks[0], .masks[1], .masks[2], .masks[3]
    )]
    UnsupportedPixelFormat {
        /// The `dwFlags` field of the pixel format
        flags: u32,
        /// Bits per pixel
        bit_count: u32,
        /// Red, green, blue and alpha masks
        masks: [u32; 4],
    },

    /// The requested mip level does not exist.
    #[error("Mip level {requested} requested, but the file only has {available}")]
    InvalidMipLevel {
        /// Requested level, starting at 0
        requested: u32,
        /// Number of levels in the file
        available: u32,
    },

    /// The file ends before the selected level's pixel data.
    #[error("Truncated DDS data: need {expected} bytes, got {actual} bytes")]
    TruncatedData {
        /// Bytes needed up to the end of the selected level
        expected: usize,
        /// Bytes present in the file
        actual: usize,
    },

    /// A DX10 header was requested for a format that has no DXGI equivalent.
    #[error("{0} cannot be written with a DX10 header")]
    NoDxgiFormat(DdsFormat),

    /// Encoding or decoding the pixel data failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Reading or writing a stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
