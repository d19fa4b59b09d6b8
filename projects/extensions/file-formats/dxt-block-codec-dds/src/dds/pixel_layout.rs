//! Uncompressed RGB pixel layouts.
//!
//! Every layout is described by its bit count and four channel masks over a little-endian
//! pixel value. Reading expands each channel to 8 bits with the same rounded tables the
//! block decoders use; writing truncates. Layouts without an alpha mask read as opaque.

use derive_enum_all_values::AllValues;
use dxt_block_codec_common::color_565::{expand_4, EXPAND_5, EXPAND_6};
use super::constants::*;

/// An uncompressed pixel layout, named from the most significant channel down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum PixelLayout {
    /// 16 bits, 1 bit alpha.
    A1R5G5B5,
    /// 16 bits, top bit unused.
    X1R5G5B5,
    /// 16 bits, 4 bits per channel.
    A4R4G4B4,
    /// 16 bits, top nibble unused.
    X4R4G4B4,
    /// 16 bits, no alpha.
    R5G6B5,
    /// 24 bits, stored as B, G, R bytes.
    R8G8B8,
    /// 32 bits, stored as R, G, B, A bytes.
    A8B8G8R8,
    /// 32 bits, stored as R, G, B, unused bytes.
    X8B8G8R8,
    /// 32 bits, stored as B, G, R, A bytes.
    A8R8G8B8,
    /// 32 bits, stored as B, G, R, unused bytes.
    X8R8G8B8,
}

impl PixelLayout {
    /// Bits per pixel.
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            Self::A1R5G5B5 | Self::X1R5G5B5 | Self::A4R4G4B4 | Self::X4R4G4B4 | Self::R5G6B5 => 16,
            Self::R8G8B8 => 24,
            Self::A8B8G8R8 | Self::X8B8G8R8 | Self::A8R8G8B8 | Self::X8R8G8B8 => 32,
        }
    }

    /// Bytes per pixel.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        (self.bits_per_pixel() / 8) as usize
    }

    /// Red, green, blue and alpha masks over the little-endian pixel value.
    pub const fn masks(self) -> [u32; 4] {
        match self {
            Self::A1R5G5B5 => [0x7C00, 0x03E0, 0x001F, 0x8000],
            Self::X1R5G5B5 => [0x7C00, 0x03E0, 0x001F, 0x0000],
            Self::A4R4G4B4 => [0x0F00, 0x00F0, 0x000F, 0xF000],
            Self::X4R4G4B4 => [0x0F00, 0x00F0, 0x000F, 0x0000],
            Self::R5G6B5 => [0xF800, 0x07E0, 0x001F, 0x0000],
            Self::R8G8B8 => [0xFF0000, 0x00FF00, 0x0000FF, 0x000000],
            Self::A8B8G8R8 => [0x000000FF, 0x0000FF00, 0x00FF0000, 0xFF000000],
            Self::X8B8G8R8 => [0x000000FF, 0x0000FF00, 0x00FF0000, 0x00000000],
            Self::A8R8G8B8 => [0x00FF0000, 0x0000FF00, 0x000000FF, 0xFF000000],
            Self::X8R8G8B8 => [0x00FF0000, 0x0000FF00, 0x000000FF, 0x00000000],
        }
    }

    /// Whether the layout stores alpha.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        self.masks()[3] != 0
    }

    /// The conventional name of the layout.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A1R5G5B5 => "A1R5G5B5",
            Self::X1R5G5B5 => "X1R5G5B5",
            Self::A4R4G4B4 => "A4R4G4B4",
            Self::X4R4G4B4 => "X4R4G4B4",
            Self::R5G6B5 => "R5G6B5",
            Self::R8G8B8 => "R8G8B8",
            Self::A8B8G8R8 => "A8B8G8R8",
            Self::X8B8G8R8 => "X8B8G8R8",
            Self::A8R8G8B8 => "A8R8G8B8",
            Self::X8R8G8B8 => "X8R8G8B8",
        }
    }

    /// Finds the layout with exactly this bit count and these masks.
    ///
    /// `masks` is red, green, blue, alpha; the alpha mask should be zero when the pixel format
    /// does not set `DDPF_ALPHAPIXELS`.
    pub fn from_masks(bit_count: u32, masks: [u32; 4]) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|layout| layout.bits_per_pixel() == bit_count && layout.masks() == masks)
    }

    /// Number of bytes a `width` x `height` image takes in this layout.
    pub fn encoded_size(self, width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(self.bytes_per_pixel())
    }

    /// Bytes per row of pixels, as written to the header pitch field.
    #[inline]
    pub(crate) fn pitch(self, width: u32) -> u32 {
        width.saturating_mul(self.bits_per_pixel()).div_ceil(8)
    }

    /// The matching DXGI format, for the layouts DX10 headers can express.
    pub(crate) const fn dxgi_format(self) -> Option<u32> {
        match self {
            Self::A8B8G8R8 => Some(DXGI_FORMAT_R8G8B8A8_UNORM),
            Self::A8R8G8B8 => Some(DXGI_FORMAT_B8G8R8A8_UNORM),
            Self::X8R8G8B8 => Some(DXGI_FORMAT_B8G8R8X8_UNORM),
            Self::R5G6B5 => Some(DXGI_FORMAT_B5G6R5_UNORM),
            Self::A1R5G5B5 => Some(DXGI_FORMAT_B5G5R5A1_UNORM),
            Self::A4R4G4B4 => Some(DXGI_FORMAT_B4G4R4A4_UNORM),
            _ => None,
        }
    }

    pub(crate) const fn from_dxgi_format(dxgi_format: u32) -> Option<Self> {
        match dxgi_format {
            DXGI_FORMAT_R8G8B8A8_TYPELESS
            | DXGI_FORMAT_R8G8B8A8_UNORM
            | DXGI_FORMAT_R8G8B8A8_UNORM_SRGB => Some(Self::A8B8G8R8),
            DXGI_FORMAT_B8G8R8A8_TYPELESS
            | DXGI_FORMAT_B8G8R8A8_UNORM
            | DXGI_FORMAT_B8G8R8A8_UNORM_SRGB => Some(Self::A8R8G8B8),
            DXGI_FORMAT_B8G8R8X8_UNORM => Some(Self::X8R8G8B8),
            DXGI_FORMAT_B5G6R5_UNORM => Some(Self::R5G6B5),
            DXGI_FORMAT_B5G5R5A1_UNORM => Some(Self::A1R5G5B5),
            DXGI_FORMAT_B4G4R4A4_UNORM => Some(Self::A4R4G4B4),
            _ => None,
        }
    }
}

impl core::fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Converts pixels stored in `layout` to RGBA8888.
///
/// `data` must hold exactly `rgba.len() / 4` pixels.
pub(crate) fn read_pixels(data: &[u8], layout: PixelLayout, rgba: &mut [u8]) {
    let masks = layout.masks();
    for (src, dst) in data
        .chunks_exact(layout.bytes_per_pixel())
        .zip(rgba.chunks_exact_mut(4))
    {
        let mut value = [0u8; 4];
        value[..src.len()].copy_from_slice(src);
        let value = u32::from_le_bytes(value);

        dst[0] = extract_channel(value, masks[0]);
        dst[1] = extract_channel(value, masks[1]);
        dst[2] = extract_channel(value, masks[2]);
        dst[3] = extract_channel(value, masks[3]);
    }
}

/// Converts RGBA8888 pixels to `layout`.
pub(crate) fn write_pixels(rgba: &[u8], layout: PixelLayout) -> Vec<u8> {
    let masks = layout.masks();
    let bytes_per_pixel = layout.bytes_per_pixel();

    let mut output = Vec::with_capacity(rgba.len() / 4 * bytes_per_pixel);
    for pixel in rgba.chunks_exact(4) {
        let value = insert_channel(pixel[0], masks[0])
            | insert_channel(pixel[1], masks[1])
            | insert_channel(pixel[2], masks[2])
            | insert_channel(pixel[3], masks[3]);
        output.extend_from_slice(&value.to_le_bytes()[..bytes_per_pixel]);
    }
    output
}

#[inline(always)]
fn extract_channel(value: u32, mask: u32) -> u8 {
    if mask == 0 {
        return 255;
    }

    let bits = (value & mask) >> mask.trailing_zeros();
    match mask.count_ones() {
        1 => (bits as u8).wrapping_neg(),
        4 => expand_4(bits as u8),
        5 => EXPAND_5[bits as usize],
        6 => EXPAND_6[bits as usize],
        _ => bits as u8,
    }
}

#[inline(always)]
fn insert_channel(channel: u8, mask: u32) -> u32 {
    if mask == 0 {
        return 0;
    }
    ((channel as u32) >> (8 - mask.count_ones())) << mask.trailing_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn every_layout_is_found_by_its_masks() {
        for layout in PixelLayout::all_values().iter() {
            assert_eq!(
                PixelLayout::from_masks(layout.bits_per_pixel(), layout.masks()),
                Some(*layout)
            );
        }
    }

    #[rstest]
    #[case::wrong_bit_count(24, PixelLayout::A8R8G8B8.masks())]
    #[case::unknown_masks(16, [0x001F, 0x07E0, 0xF800, 0])]
    #[case::missing_alpha(32, [0x00FF0000, 0x0000FF00, 0x000000FF, 0xFF])]
    fn unknown_masks_are_rejected(#[case] bit_count: u32, #[case] masks: [u32; 4]) {
        assert_eq!(PixelLayout::from_masks(bit_count, masks), None);
    }

    #[rstest]
    #[case(PixelLayout::R8G8B8, &[0x30, 0x20, 0x10], [0x10, 0x20, 0x30, 255])]
    #[case(PixelLayout::A8B8G8R8, &[0x10, 0x20, 0x30, 0x40], [0x10, 0x20, 0x30, 0x40])]
    #[case(PixelLayout::X8B8G8R8, &[0x10, 0x20, 0x30, 0x40], [0x10, 0x20, 0x30, 255])]
    #[case(PixelLayout::A8R8G8B8, &[0x30, 0x20, 0x10, 0x40], [0x10, 0x20, 0x30, 0x40])]
    #[case(PixelLayout::X8R8G8B8, &[0x30, 0x20, 0x10, 0x00], [0x10, 0x20, 0x30, 255])]
    #[case(PixelLayout::R5G6B5, &[0x00, 0xF8], [255, 0, 0, 255])]
    #[case(PixelLayout::A1R5G5B5, &[0x1F, 0x80], [0, 0, 255, 255])]
    #[case(PixelLayout::A1R5G5B5, &[0x1F, 0x00], [0, 0, 255, 0])]
    #[case(PixelLayout::X1R5G5B5, &[0xE0, 0x03], [0, 255, 0, 255])]
    #[case(PixelLayout::A4R4G4B4, &[0x21, 0x43], [0x33, 0x22, 0x11, 0x44])]
    #[case(PixelLayout::X4R4G4B4, &[0x21, 0xF3], [0x33, 0x22, 0x11, 255])]
    fn reads_known_pixel(
        #[case] layout: PixelLayout,
        #[case] bytes: &[u8],
        #[case] expected: [u8; 4],
    ) {
        let mut rgba = [0u8; 4];
        read_pixels(bytes, layout, &mut rgba);
        assert_eq!(rgba, expected);
    }

    #[test]
    fn packed_values_survive_read_then_write() {
        for layout in PixelLayout::all_values().iter() {
            // Sweep a spread of raw values, clearing bits the layout does not use.
            let used: u32 = layout.masks().iter().fold(0, |acc, m| acc | m);
            let raw: Vec<u8> = (0..256u32)
                .flat_map(|i| {
                    let value = i.wrapping_mul(0x0101_0101).wrapping_mul(2654435761) & used;
                    value.to_le_bytes()[..layout.bytes_per_pixel()].to_vec()
                })
                .collect();

            let mut rgba = vec![0u8; 256 * 4];
            read_pixels(&raw, *layout, &mut rgba);
            assert_eq!(write_pixels(&rgba, *layout), raw, "{layout}");
        }
    }

    #[test]
    fn one_bit_alpha_splits_at_half() {
        let rgba = [0, 0, 0, 127, 0, 0, 0, 128];
        let packed = write_pixels(&rgba, PixelLayout::A1R5G5B5);
        assert_eq!(packed, [0x00, 0x00, 0x00, 0x80]);
    }

    #[rstest]
    #[case(PixelLayout::R5G6B5, 3, 6)]
    #[case(PixelLayout::R8G8B8, 3, 9)]
    #[case(PixelLayout::A8R8G8B8, 5, 20)]
    fn pitch_is_bytes_per_row(#[case] layout: PixelLayout, #[case] width: u32, #[case] pitch: u32) {
        assert_eq!(layout.pitch(width), pitch);
    }
}
