//! In-memory RGBA8888 raster.

use crate::error::{CodecError, CodecResult};
use dxt_block_codec_common::color_8888::Color8888;
use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;

/// An RGBA image with 8 bits per channel, stored row-major without padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Wraps `data` as an image of the given size.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidPixelCount`] if `data` is not exactly `width * height * 4` bytes,
    /// [`CodecError::InvalidDimensions`] if that size overflows.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> CodecResult<Self> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(CodecError::InvalidPixelCount {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a fully transparent black image.
    pub fn blank(width: u32, height: u32) -> CodecResult<Self> {
        let len = Self::byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The raw RGBA bytes, mutably.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the image, returning the raw RGBA bytes.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Returns the pixel at `(x, y)`, or [`None`] if it is out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color8888> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let p = &self.data[offset..offset + 4];
        Some(Color8888::new(p[0], p[1], p[2], p[3]))
    }

    /// Number of bytes in one row of pixels.
    #[inline]
    pub(crate) fn row_bytes(&self) -> usize {
        self.width as usize * 4
    }

    /// Gathers the 4x4 block at block coordinates `(bx, by)`.
    ///
    /// Pixels past the right or bottom edge repeat the last column or row. The block must
    /// overlap the image.
    pub(crate) fn read_block(&self, bx: usize, by: usize) -> Decoded4x4Block {
        let max_x = self.width as usize - 1;
        let max_y = self.height as usize - 1;

        let mut block = Decoded4x4Block::default();
        for (i, pixel) in block.pixels.iter_mut().enumerate() {
            let x = (bx * 4 + i % 4).min(max_x);
            let y = (by * 4 + i / 4).min(max_y);
            let offset = (y * self.width as usize + x) * 4;
            let p = &self.data[offset..offset + 4];
            *pixel = Color8888::new(p[0], p[1], p[2], p[3]);
        }
        block
    }

    fn byte_len(width: u32, height: u32) -> CodecResult<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(CodecError::InvalidDimensions {
                width,
                height,
                reason: "image is too large",
            })
    }
}

/// Writes the in-bounds pixels of `block` into a band of up to 4 image rows.
///
/// `band` starts at the first row of block row `by`; `width` is the image width in pixels.
/// Pixels that fall outside the band (partial edge blocks) are dropped.
#[inline]
pub(crate) fn write_block_to_band(band: &mut [u8], width: usize, bx: usize, block: &Decoded4x4Block) {
    let row_bytes = width * 4;
    let rows = band.len() / row_bytes;
    let columns = (width - bx * 4).min(4);

    for y in 0..rows.min(4) {
        let row_start = y * row_bytes + bx * 16;
        let row = &mut band[row_start..row_start + columns * 4];
        for (x, out) in row.chunks_exact_mut(4).enumerate() {
            let pixel = block.pixels[y * 4 + x];
            out.copy_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[x as u8, y as u8, 0, 255]);
            }
        }
        RgbaImage::new(width, height, data).unwrap()
    }

    #[rstest]
    #[case(0)]
    #[case(15)]
    #[case(17)]
    fn new_rejects_wrong_length(#[case] len: usize) {
        assert!(matches!(
            RgbaImage::new(2, 2, vec![0; len]),
            Err(CodecError::InvalidPixelCount { expected: 16, .. })
        ));
    }

    #[test]
    fn read_block_is_row_major() {
        let image = gradient(8, 8);
        let block = image.read_block(1, 1);
        assert_eq!(block.pixels[0], Color8888::new(4, 4, 0, 255));
        assert_eq!(block.pixels[3], Color8888::new(7, 4, 0, 255));
        assert_eq!(block.pixels[12], Color8888::new(4, 7, 0, 255));
    }

    #[test]
    fn read_block_replicates_edges() {
        let image = gradient(5, 6);
        let block = image.read_block(1, 1);
        // Only column 4 and rows 4..=5 exist.
        assert_eq!(block.pixels[0], Color8888::new(4, 4, 0, 255));
        assert_eq!(block.pixels[3], Color8888::new(4, 4, 0, 255));
        assert_eq!(block.pixels[15], Color8888::new(4, 5, 0, 255));
    }

    #[test]
    fn write_block_clips_partial_blocks() {
        // 6x2 image: block row 0 has a full block and a 2x2 partial block.
        let mut data = vec![0u8; 6 * 2 * 4];
        let block = Decoded4x4Block::new(Color8888::new(9, 9, 9, 9));
        write_block_to_band(&mut data, 6, 1, &block);

        let written: Vec<usize> = data
            .chunks_exact(4)
            .enumerate()
            .filter(|(_, p)| p[0] == 9)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(written, [4, 5, 10, 11]);
    }

    #[test]
    fn get_pixel_bounds() {
        let image = gradient(3, 2);
        assert_eq!(image.get_pixel(2, 1), Some(Color8888::new(2, 1, 0, 255)));
        assert_eq!(image.get_pixel(3, 0), None);
        assert_eq!(image.get_pixel(0, 2), None);
    }
}
