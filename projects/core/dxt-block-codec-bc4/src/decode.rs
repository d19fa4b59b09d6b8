//! BC4 block decoding.

use crate::layout::{index_at, read_ramp_block};
use crate::BC4_BLOCK_SIZE;
use dxt_block_codec_common::color_8888::Color8888;
use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
use dxt_block_codec_common::palette::{snorm_ramp, snorm_to_unorm, unorm_ramp};

/// Decodes an unsigned ramp channel into 16 intensities, pixel 0 first.
#[inline]
pub fn decode_unorm_channel(block: &[u8; BC4_BLOCK_SIZE]) -> [u8; 16] {
    let (e0, e1, indices) = read_ramp_block(block);
    let ramp = unorm_ramp(e0, e1);

    let mut values = [0u8; 16];
    for (i, value) in values.iter_mut().enumerate() {
        *value = ramp[index_at(indices, i)];
    }
    values
}

/// Decodes a signed ramp channel into 16 SNORM intensities, pixel 0 first.
#[inline]
pub fn decode_snorm_channel(block: &[u8; BC4_BLOCK_SIZE]) -> [i8; 16] {
    let (e0, e1, indices) = read_ramp_block(block);
    let ramp = snorm_ramp(e0 as i8, e1 as i8);

    let mut values = [0i8; 16];
    for (i, value) in values.iter_mut().enumerate() {
        *value = ramp[index_at(indices, i)];
    }
    values
}

/// Decodes a BC4 UNORM block. Each pixel becomes `(r, 0, 0, 255)`.
///
/// # Example
///
/// ```
/// use dxt_block_codec_bc4::decode_bc4_block;
///
/// let decoded = decode_bc4_block(&[200, 200, 0, 0, 0, 0, 0, 0]);
/// assert!(decoded.pixels.iter().all(|p| (p.r, p.g, p.b, p.a) == (200, 0, 0, 255)));
/// ```
#[inline]
pub fn decode_bc4_block(block: &[u8; BC4_BLOCK_SIZE]) -> Decoded4x4Block {
    red_block(decode_unorm_channel(block))
}

/// Decodes a BC4 SNORM block. Values are mapped onto 0-255 and written as `(r, 0, 0, 255)`.
#[inline]
pub fn decode_bc4_signed_block(block: &[u8; BC4_BLOCK_SIZE]) -> Decoded4x4Block {
    red_block(decode_snorm_channel(block).map(snorm_to_unorm))
}

/// Decodes a BC4 UNORM block from a slice, or returns [`None`] if it is too short.
#[inline]
pub fn decode_bc4_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; BC4_BLOCK_SIZE] = src.get(..BC4_BLOCK_SIZE)?.try_into().ok()?;
    Some(decode_bc4_block(block))
}

/// Decodes a BC4 SNORM block from a slice, or returns [`None`] if it is too short.
#[inline]
pub fn decode_bc4_signed_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; BC4_BLOCK_SIZE] = src.get(..BC4_BLOCK_SIZE)?.try_into().ok()?;
    Some(decode_bc4_signed_block(block))
}

#[inline(always)]
fn red_block(red: [u8; 16]) -> Decoded4x4Block {
    let mut decoded = Decoded4x4Block::default();
    for (pixel, r) in decoded.pixels.iter_mut().zip(red) {
        *pixel = Color8888::new(r, 0, 0, 255);
    }
    decoded
}
