//! Common test imports and utilities for BC4 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::{
    decode_bc4_block, decode_bc4_block_from_slice, decode_bc4_signed_block,
    decode_bc4_signed_block_from_slice, decode_snorm_channel, decode_unorm_channel,
    encode_bc4_block, encode_bc4_signed_block, encode_snorm_channel, encode_unorm_channel,
};

// Common types from dxt_block_codec_common
pub use dxt_block_codec_common::color_8888::Color8888;
pub use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
