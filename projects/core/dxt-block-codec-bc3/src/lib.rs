#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

use dxt_block_codec_bc1::{decode_color_half, encode_color_half, BC1_BLOCK_SIZE};
use dxt_block_codec_bc4::{
    decode_unorm_channel, encode_unorm_channel, AlphaForcing, BC4_BLOCK_SIZE,
};
use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;

/// Size of a single BC3 block in bytes.
pub const BC3_BLOCK_SIZE: usize = 16;

/// Decodes a BC3 block into 16 RGBA pixels.
#[inline]
pub fn decode_bc3_block(block: &[u8; BC3_BLOCK_SIZE]) -> Decoded4x4Block {
    let (alpha, color) = split(block);

    let mut decoded = decode_color_half(&color);
    for (pixel, a) in decoded.pixels.iter_mut().zip(decode_unorm_channel(&alpha)) {
        pixel.a = a;
    }
    decoded
}

/// Decodes a BC3 block from a slice, or returns [`None`] if it is too short.
#[inline]
pub fn decode_bc3_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; BC3_BLOCK_SIZE] = src.get(..BC3_BLOCK_SIZE)?.try_into().ok()?;
    Some(decode_bc3_block(block))
}

/// Encodes 16 pixels into a BC3 block.
///
/// Pixels with alpha strictly below `alpha_threshold` are written with the alpha ramp's
/// transparent index. Pass `0` to disable this.
///
/// # Example
///
/// ```
/// use dxt_block_codec_bc3::{decode_bc3_block, encode_bc3_block};
/// use dxt_block_codec_common::color_8888::Color8888;
/// use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
///
/// let block = Decoded4x4Block::new(Color8888::new(255, 0, 0, 77));
/// let decoded = decode_bc3_block(&encode_bc3_block(&block, 0));
/// assert_eq!(decoded, block);
/// ```
pub fn encode_bc3_block(block: &Decoded4x4Block, alpha_threshold: u8) -> [u8; BC3_BLOCK_SIZE] {
    let alpha = block.pixels.map(|p| p.a);
    let forcing = (alpha_threshold > 0).then_some(AlphaForcing {
        threshold: alpha_threshold,
    });

    let mut out = [0u8; BC3_BLOCK_SIZE];
    out[..BC4_BLOCK_SIZE].copy_from_slice(&encode_unorm_channel(&alpha, forcing));
    out[BC4_BLOCK_SIZE..].copy_from_slice(&encode_color_half(block));
    out
}

#[inline(always)]
fn split(block: &[u8; BC3_BLOCK_SIZE]) -> ([u8; BC4_BLOCK_SIZE], [u8; BC1_BLOCK_SIZE]) {
    let mut alpha = [0u8; BC4_BLOCK_SIZE];
    let mut color = [0u8; BC1_BLOCK_SIZE];
    alpha.copy_from_slice(&block[..BC4_BLOCK_SIZE]);
    color.copy_from_slice(&block[BC4_BLOCK_SIZE..]);
    (alpha, color)
}
