//! BC1 (DXT1) block encoding.
//!
//! Encoding a block runs three steps:
//!
//! 1. [`endpoints::select_endpoints`] picks the two most distant pixels and stores them in the
//!    order that signals the palette mode.
//! 2. The palette is built with [`color_palette`], exactly as the decoder will build it.
//! 3. [`indices::select_color_indices`] maps each pixel to its closest palette entry.

pub mod endpoints;
pub mod indices;

use crate::{PaletteRule, BC1_BLOCK_SIZE};
use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
use dxt_block_codec_common::palette::color_palette;
use endpoints::select_endpoints;
use indices::select_color_indices;

/// How the encoder treats the alpha channel of a BC1 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlphaHandling {
    /// Alpha is ignored; every pixel is encoded as an opaque colour.
    #[default]
    ForceOpaque,
    /// Pixels with alpha below `threshold` become transparent (1-bit alpha).
    ///
    /// If any such pixel exists the block is written in three colour mode and those
    /// pixels use index `0b11`. Transparent pixels take no part in endpoint selection.
    PunchThrough {
        /// Alpha values strictly below this are transparent.
        threshold: u8,
    },
}

impl AlphaHandling {
    #[inline]
    fn threshold(self) -> Option<u8> {
        match self {
            AlphaHandling::ForceOpaque => None,
            AlphaHandling::PunchThrough { threshold } => Some(threshold),
        }
    }
}

/// Encodes 16 pixels into a BC1 block.
///
/// # Example
///
/// ```
/// use dxt_block_codec_bc1::{encode_bc1_block, AlphaHandling};
/// use dxt_block_codec_common::color_8888::Color8888;
/// use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
///
/// let red = Decoded4x4Block::new(Color8888::new(255, 0, 0, 255));
/// let block = encode_bc1_block(&red, AlphaHandling::ForceOpaque);
/// assert_eq!(block, [0x00, 0xF8, 0x00, 0xF8, 0x00, 0x00, 0x00, 0x00]);
/// ```
pub fn encode_bc1_block(block: &Decoded4x4Block, alpha: AlphaHandling) -> [u8; BC1_BLOCK_SIZE] {
    encode_color_block(block, alpha.threshold(), PaletteRule::FromEndpointOrder)
}

/// Encodes the colour half of a BC2 or BC3 block.
///
/// Alpha is ignored and the four colour palette is always used, matching
/// [`decode_color_half`](crate::decode_color_half).
pub fn encode_color_half(block: &Decoded4x4Block) -> [u8; BC1_BLOCK_SIZE] {
    encode_color_block(block, None, PaletteRule::AlwaysFourColor)
}

#[inline(always)]
fn encode_color_block(
    block: &Decoded4x4Block,
    transparent_below: Option<u8>,
    rule: PaletteRule,
) -> [u8; BC1_BLOCK_SIZE] {
    let alpha_mode = match transparent_below {
        Some(threshold) => block.pixels.iter().any(|p| p.is_transparent(threshold)),
        None => false,
    };

    let endpoints = select_endpoints(block, transparent_below, alpha_mode);
    let mode = rule.mode(endpoints.c0, endpoints.c1);
    let palette = color_palette(endpoints.c0, endpoints.c1, mode);
    let indices = select_color_indices(
        block,
        &palette,
        mode,
        if alpha_mode { transparent_below } else { None },
    );

    let mut out = [0u8; BC1_BLOCK_SIZE];
    out[0..2].copy_from_slice(&endpoints.c0.raw_value().to_le_bytes());
    out[2..4].copy_from_slice(&endpoints.c1.raw_value().to_le_bytes());
    out[4..8].copy_from_slice(&indices.to_le_bytes());
    out
}
