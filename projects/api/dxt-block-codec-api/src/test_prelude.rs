//! Common test imports and utilities for API tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::{
    decode_block, encode_block, encode_decoded_block, BlockFormat, CodecError, EncodeSettings,
    RgbaImage,
};

// Common types from dxt_block_codec_common
pub use dxt_block_codec_common::color_8888::Color8888;
pub use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;

// Enum iteration in parameterised tests
pub use derive_enum_all_values::AllValues;
