#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

use dxt_block_codec_common::color_565::Color565;
use dxt_block_codec_common::palette::PaletteMode;

pub mod decode;
pub mod encode;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use decode::{decode_bc1_block, decode_bc1_block_from_slice, decode_color_half};
pub use encode::{encode_bc1_block, encode_color_half, AlphaHandling};

/// Size of a single BC1 block in bytes.
pub const BC1_BLOCK_SIZE: usize = 8;

/// Controls how a colour block's palette is derived from its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum PaletteRule {
    /// Plain BC1: the endpoint order picks between four and three colours.
    FromEndpointOrder,
    /// Colour half of BC2/BC3: always four colours, regardless of endpoint order.
    AlwaysFourColor,
}

impl PaletteRule {
    #[inline]
    pub(crate) fn mode(self, c0: Color565, c1: Color565) -> PaletteMode {
        match self {
            PaletteRule::FromEndpointOrder => PaletteMode::for_bc1_endpoints(c0, c1),
            PaletteRule::AlwaysFourColor => PaletteMode::FourColor,
        }
    }
}
