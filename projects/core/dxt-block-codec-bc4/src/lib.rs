#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod decode;
pub mod encode;
pub mod layout;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use decode::{
    decode_bc4_block, decode_bc4_block_from_slice, decode_bc4_signed_block,
    decode_bc4_signed_block_from_slice, decode_snorm_channel, decode_unorm_channel,
};
pub use encode::{
    encode_bc4_block, encode_bc4_signed_block, encode_snorm_channel, encode_unorm_channel,
    AlphaForcing,
};

/// Size of a single BC4 block in bytes.
pub const BC4_BLOCK_SIZE: usize = 8;
