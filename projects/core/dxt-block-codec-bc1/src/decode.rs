//! BC1 (DXT1) block decoding.
//!
//! The palette is rebuilt through [`color_palette`], the same function the encoder uses,
//! so a decoded block reproduces exactly the colours the encoder matched against.

use crate::{PaletteRule, BC1_BLOCK_SIZE};
use dxt_block_codec_common::color_565::Color565;
use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
use dxt_block_codec_common::palette::color_palette;

/// Decodes a BC1 block into 16 RGBA pixels.
///
/// Blocks stored with `endpoint0 <= endpoint1` decode with the three colour palette,
/// where index `0b11` yields transparent black `(0, 0, 0, 0)`.
///
/// # Example
///
/// ```
/// use dxt_block_codec_bc1::decode_bc1_block;
///
/// // Solid red: endpoint0 = 0xF800, all indices 0.
/// let block = [0x00, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
/// let decoded = decode_bc1_block(&block);
/// assert!(decoded.pixels.iter().all(|p| (p.r, p.g, p.b, p.a) == (255, 0, 0, 255)));
/// ```
#[inline]
pub fn decode_bc1_block(block: &[u8; BC1_BLOCK_SIZE]) -> Decoded4x4Block {
    decode_color_block(block, PaletteRule::FromEndpointOrder)
}

/// Decodes a BC1 block from a slice.
///
/// Returns [`None`] if `src` is shorter than [`BC1_BLOCK_SIZE`]; bytes past the first
/// block are ignored.
#[inline]
pub fn decode_bc1_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; BC1_BLOCK_SIZE] = src.get(..BC1_BLOCK_SIZE)?.try_into().ok()?;
    Some(decode_bc1_block(block))
}

/// Decodes the colour half of a BC2 or BC3 block.
///
/// The layout matches BC1, but the palette is always the four colour one and every
/// pixel is opaque. The caller fills in alpha from the block's alpha half.
#[inline]
pub fn decode_color_half(block: &[u8; BC1_BLOCK_SIZE]) -> Decoded4x4Block {
    decode_color_block(block, PaletteRule::AlwaysFourColor)
}

#[inline(always)]
fn decode_color_block(block: &[u8; BC1_BLOCK_SIZE], rule: PaletteRule) -> Decoded4x4Block {
    let c0 = Color565::from_raw(u16::from_le_bytes([block[0], block[1]]));
    let c1 = Color565::from_raw(u16::from_le_bytes([block[2], block[3]]));
    let indices = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);

    let palette = color_palette(c0, c1, rule.mode(c0, c1));

    let mut decoded = Decoded4x4Block::default();
    for (i, pixel) in decoded.pixels.iter_mut().enumerate() {
        *pixel = palette[((indices >> (i * 2)) & 0b11) as usize];
    }
    decoded
}
