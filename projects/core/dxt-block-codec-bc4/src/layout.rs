//! Bit layout of a ramp channel block.
//!
//! ```text
//! byte:  0     1     2 ........................... 7
//!      | e0  | e1  | 16 x 3-bit indices, pixel 0 in bit 16 of the LE u64 |
//! ```

use crate::BC4_BLOCK_SIZE;

/// Mask for a single 3-bit index.
pub const INDEX_MASK: u64 = 0b111;

/// Splits a block into its two endpoint bytes and the packed 48-bit index field.
#[inline]
pub fn read_ramp_block(block: &[u8; BC4_BLOCK_SIZE]) -> (u8, u8, u64) {
    let raw = u64::from_le_bytes(*block);
    (block[0], block[1], raw >> 16)
}

/// Assembles a block from two endpoint bytes and a packed 48-bit index field.
#[inline]
pub fn write_ramp_block(e0: u8, e1: u8, indices: u64) -> [u8; BC4_BLOCK_SIZE] {
    let raw = (e0 as u64) | ((e1 as u64) << 8) | ((indices & 0xFFFF_FFFF_FFFF) << 16);
    raw.to_le_bytes()
}

/// Reads the index of pixel `i` (0-15) from a packed index field.
#[inline(always)]
pub const fn index_at(indices: u64, i: usize) -> usize {
    ((indices >> (i * 3)) & INDEX_MASK) as usize
}

/// Packs 16 indices (each 0-7) into a 48-bit field.
#[inline]
pub fn pack_indices(indices: &[u8; 16]) -> u64 {
    indices
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &index)| acc | (((index as u64) & INDEX_MASK) << (i * 3)))
}
