//! Common test imports and utilities for BC1 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::{
    decode_bc1_block, decode_bc1_block_from_slice, decode_color_half, encode_bc1_block,
    encode_color_half, AlphaHandling,
};

// Common types from dxt_block_codec_common
pub use dxt_block_codec_common::color_8888::Color8888;
pub use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
