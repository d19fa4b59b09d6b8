#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

use dxt_block_codec_bc1::{decode_color_half, encode_color_half, BC1_BLOCK_SIZE};
use dxt_block_codec_common::color_565::expand_4;
use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;

/// Size of a single BC2 block in bytes.
pub const BC2_BLOCK_SIZE: usize = 16;

/// Decodes a BC2 block into 16 RGBA pixels.
///
/// # Example
///
/// ```
/// use dxt_block_codec_bc2::decode_bc2_block;
///
/// let mut block = [0u8; 16];
/// block[0] = 0x0F; // pixel 0 fully opaque, pixel 1 fully transparent
/// let decoded = decode_bc2_block(&block);
/// assert_eq!(decoded.pixels[0].a, 255);
/// assert_eq!(decoded.pixels[1].a, 0);
/// ```
#[inline]
pub fn decode_bc2_block(block: &[u8; BC2_BLOCK_SIZE]) -> Decoded4x4Block {
    let (alpha, color) = split(block);
    let alpha = u64::from_le_bytes(alpha);

    let mut decoded = decode_color_half(&color);
    for (i, pixel) in decoded.pixels.iter_mut().enumerate() {
        pixel.a = expand_4(((alpha >> (i * 4)) & 0xF) as u8);
    }
    decoded
}

/// Decodes a BC2 block from a slice, or returns [`None`] if it is too short.
#[inline]
pub fn decode_bc2_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; BC2_BLOCK_SIZE] = src.get(..BC2_BLOCK_SIZE)?.try_into().ok()?;
    Some(decode_bc2_block(block))
}

/// Encodes 16 pixels into a BC2 block.
///
/// Alpha keeps its top four bits; colour is encoded opaque with the four colour palette.
pub fn encode_bc2_block(block: &Decoded4x4Block) -> [u8; BC2_BLOCK_SIZE] {
    let alpha = block
        .pixels
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, p)| acc | (((p.a >> 4) as u64) << (i * 4)));

    let mut out = [0u8; BC2_BLOCK_SIZE];
    out[..8].copy_from_slice(&alpha.to_le_bytes());
    out[8..].copy_from_slice(&encode_color_half(block));
    out
}

#[inline(always)]
fn split(block: &[u8; BC2_BLOCK_SIZE]) -> ([u8; 8], [u8; BC1_BLOCK_SIZE]) {
    let mut alpha = [0u8; 8];
    let mut color = [0u8; BC1_BLOCK_SIZE];
    alpha.copy_from_slice(&block[..8]);
    color.copy_from_slice(&block[8..]);
    (alpha, color)
}
