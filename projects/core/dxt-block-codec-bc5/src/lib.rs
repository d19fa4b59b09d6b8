#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

use dxt_block_codec_bc4::{
    decode_snorm_channel, decode_unorm_channel, encode_snorm_channel, encode_unorm_channel,
    BC4_BLOCK_SIZE,
};
use dxt_block_codec_common::color_8888::Color8888;
use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
use dxt_block_codec_common::palette::{snorm_to_unorm, unorm_to_snorm};

/// Size of a single BC5 block in bytes.
pub const BC5_BLOCK_SIZE: usize = 16;

/// Decodes a BC5 UNORM block into `(r, g, 0, 255)` pixels.
#[inline]
pub fn decode_bc5_block(block: &[u8; BC5_BLOCK_SIZE]) -> Decoded4x4Block {
    let (red, green) = split(block);
    red_green_block(decode_unorm_channel(&red), decode_unorm_channel(&green))
}

/// Decodes a BC5 SNORM block into `(r, g, 0, 255)` pixels, mapping each channel onto 0-255.
#[inline]
pub fn decode_bc5_signed_block(block: &[u8; BC5_BLOCK_SIZE]) -> Decoded4x4Block {
    let (red, green) = split(block);
    red_green_block(
        decode_snorm_channel(&red).map(snorm_to_unorm),
        decode_snorm_channel(&green).map(snorm_to_unorm),
    )
}

/// Decodes a BC5 UNORM block from a slice, or returns [`None`] if it is too short.
#[inline]
pub fn decode_bc5_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; BC5_BLOCK_SIZE] = src.get(..BC5_BLOCK_SIZE)?.try_into().ok()?;
    Some(decode_bc5_block(block))
}

/// Decodes a BC5 SNORM block from a slice, or returns [`None`] if it is too short.
#[inline]
pub fn decode_bc5_signed_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; BC5_BLOCK_SIZE] = src.get(..BC5_BLOCK_SIZE)?.try_into().ok()?;
    Some(decode_bc5_signed_block(block))
}

/// Encodes the red and green channels of a block as BC5 UNORM.
///
/// # Example
///
/// ```
/// use dxt_block_codec_bc5::{decode_bc5_block, encode_bc5_block};
/// use dxt_block_codec_common::color_8888::Color8888;
/// use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
///
/// let block = Decoded4x4Block::new(Color8888::new(10, 200, 99, 0));
/// let decoded = decode_bc5_block(&encode_bc5_block(&block));
/// assert!(decoded.pixels.iter().all(|p| (p.r, p.g, p.b, p.a) == (10, 200, 0, 255)));
/// ```
pub fn encode_bc5_block(block: &Decoded4x4Block) -> [u8; BC5_BLOCK_SIZE] {
    join(
        encode_unorm_channel(&block.pixels.map(|p| p.r), None),
        encode_unorm_channel(&block.pixels.map(|p| p.g), None),
    )
}

/// Encodes the red and green channels of a block as BC5 SNORM.
pub fn encode_bc5_signed_block(block: &Decoded4x4Block) -> [u8; BC5_BLOCK_SIZE] {
    join(
        encode_snorm_channel(&block.pixels.map(|p| unorm_to_snorm(p.r))),
        encode_snorm_channel(&block.pixels.map(|p| unorm_to_snorm(p.g))),
    )
}

#[inline(always)]
fn red_green_block(red: [u8; 16], green: [u8; 16]) -> Decoded4x4Block {
    let mut decoded = Decoded4x4Block::default();
    for (i, pixel) in decoded.pixels.iter_mut().enumerate() {
        *pixel = Color8888::new(red[i], green[i], 0, 255);
    }
    decoded
}

#[inline(always)]
fn split(block: &[u8; BC5_BLOCK_SIZE]) -> ([u8; BC4_BLOCK_SIZE], [u8; BC4_BLOCK_SIZE]) {
    let mut red = [0u8; BC4_BLOCK_SIZE];
    let mut green = [0u8; BC4_BLOCK_SIZE];
    red.copy_from_slice(&block[..BC4_BLOCK_SIZE]);
    green.copy_from_slice(&block[BC4_BLOCK_SIZE..]);
    (red, green)
}

#[inline(always)]
fn join(red: [u8; BC4_BLOCK_SIZE], green: [u8; BC4_BLOCK_SIZE]) -> [u8; BC5_BLOCK_SIZE] {
    let mut out = [0u8; BC5_BLOCK_SIZE];
    out[..BC4_BLOCK_SIZE].copy_from_slice(&red);
    out[BC4_BLOCK_SIZE..].copy_from_slice(&green);
    out
}
