//! # Decoded 4x4 Block
//!
//! This module provides the [`Decoded4x4Block`] structure, the uncompressed form of a single
//! BC1-BC5 block. Encoders take one as input and decoders produce one as output.
//!
//! ## Usage
//!
//! ```
//! use dxt_block_codec_common::color_8888::Color8888;
//! use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
//!
//! let red_pixel = Color8888::new(255, 0, 0, 255);
//! let block = Decoded4x4Block::new(red_pixel);
//! assert_eq!(block.get_pixel(3, 3), Some(red_pixel));
//! ```
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```
//!
//! Pixel `i` of the block is also the `i`th index slot of every BC index field.

use crate::color_8888::Color8888;

/// Represents a decoded 4x4 block of BC pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decoded4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; 16],
}

impl Decoded4x4Block {
    /// Constructs a new decoded block initialised with 16 copies of the provided pixel.
    pub const fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Constructs a block from 64 bytes of row-major RGBA8888 data.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
    ///
    /// let bytes = [0x80u8; 64];
    /// let block = Decoded4x4Block::from_rgba_bytes(&bytes);
    /// assert_eq!(block.to_rgba_bytes(), bytes);
    /// ```
    pub fn from_rgba_bytes(bytes: &[u8; 64]) -> Self {
        let mut block = Self::default();
        for (pixel, rgba) in block.pixels.iter_mut().zip(bytes.chunks_exact(4)) {
            *pixel = Color8888::new(rgba[0], rgba[1], rgba[2], rgba[3]);
        }
        block
    }

    /// Writes the block out as 64 bytes of row-major RGBA8888 data.
    pub fn to_rgba_bytes(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        for (rgba, pixel) in bytes.chunks_exact_mut(4).zip(self.pixels.iter()) {
            rgba.copy_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
        }
        bytes
    }

    /// Gets the pixel at `(x, y)`, or [`None`] if either coordinate is outside 0-3.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color8888> {
        if x < 4 && y < 4 {
            Some(self.pixels[y * 4 + x])
        } else {
            None
        }
    }

    /// Sets the pixel at `(x, y)`. Returns `false` and leaves the block unchanged if either
    /// coordinate is outside 0-3.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Color8888) -> bool {
        if x < 4 && y < 4 {
            self.pixels[y * 4 + x] = pixel;
            true
        } else {
            false
        }
    }
}
