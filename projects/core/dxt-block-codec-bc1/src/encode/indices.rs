//! Colour index selection.

use dxt_block_codec_common::color_8888::Color8888;
use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
use dxt_block_codec_common::palette::{PaletteMode, TRANSPARENT_INDEX};
use likely_stable::unlikely;

/// Returns the index of the palette entry closest to `pixel`.
///
/// Distance is unweighted squared RGB; on a tie the lowest index wins. In a three colour
/// palette the transparent slot is never a candidate.
#[inline]
pub fn closest_color_index(pixel: &Color8888, palette: &[Color8888; 4], mode: PaletteMode) -> u32 {
    let candidates = match mode {
        PaletteMode::FourColor => 4,
        PaletteMode::ThreeColor => 3,
    };

    let mut best_index = 0;
    let mut best_distance = u32::MAX;
    for (index, entry) in palette.iter().enumerate().take(candidates) {
        let distance = pixel.distance_squared_rgb(entry);
        if distance < best_distance {
            best_distance = distance;
            best_index = index as u32;
        }
    }
    best_index
}

/// Packs the 2-bit indices for all 16 pixels, pixel 0 in the lowest bits.
///
/// When `transparent_below` is [`Some`], pixels with alpha below it are written as
/// [`TRANSPARENT_INDEX`]. Only pass a threshold together with a three colour palette.
pub fn select_color_indices(
    block: &Decoded4x4Block,
    palette: &[Color8888; 4],
    mode: PaletteMode,
    transparent_below: Option<u8>,
) -> u32 {
    let mut indices = 0u32;
    for (i, pixel) in block.pixels.iter().enumerate() {
        let index = match transparent_below {
            Some(threshold) if unlikely(pixel.is_transparent(threshold)) => TRANSPARENT_INDEX,
            _ => closest_color_index(pixel, palette, mode),
        };
        indices |= index << (i * 2);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    const PALETTE: [Color8888; 4] = [
        Color8888::new(255, 255, 255, 255),
        Color8888::new(0, 0, 0, 255),
        Color8888::new(170, 170, 170, 255),
        Color8888::new(85, 85, 85, 255),
    ];

    #[rstest]
    #[case(Color8888::new(250, 250, 250, 255), 0)]
    #[case(Color8888::new(3, 3, 3, 255), 1)]
    #[case(Color8888::new(160, 170, 180, 255), 2)]
    #[case(Color8888::new(90, 80, 85, 255), 3)]
    fn picks_nearest_entry(#[case] pixel: Color8888, #[case] expected: u32) {
        assert_eq!(closest_color_index(&pixel, &PALETTE, PaletteMode::FourColor), expected);
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let palette = [Color8888::new(10, 10, 10, 255); 4];
        let pixel = Color8888::new(12, 12, 12, 255);
        assert_eq!(closest_color_index(&pixel, &palette, PaletteMode::FourColor), 0);
    }

    #[test]
    fn opaque_black_never_picks_transparent_slot() {
        let palette = [
            Color8888::new(100, 100, 100, 255),
            Color8888::new(200, 200, 200, 255),
            Color8888::new(150, 150, 150, 255),
            Color8888::TRANSPARENT,
        ];
        let black = Color8888::new(0, 0, 0, 255);
        assert_eq!(closest_color_index(&black, &palette, PaletteMode::ThreeColor), 0);
    }

    #[test]
    fn transparent_pixels_forced_to_index_3() {
        let mut block = Decoded4x4Block::new(Color8888::new(255, 255, 255, 255));
        block.pixels[0] = Color8888::new(255, 255, 255, 0);
        block.pixels[15] = Color8888::new(255, 255, 255, 127);

        let indices = select_color_indices(&block, &PALETTE, PaletteMode::ThreeColor, Some(128));
        assert_eq!(indices, 0b11 | (0b11 << 30));
    }

    #[test]
    fn without_threshold_alpha_is_ignored() {
        let block = Decoded4x4Block::new(Color8888::new(0, 0, 0, 0));
        let indices = select_color_indices(&block, &PALETTE, PaletteMode::FourColor, None);
        assert_eq!(indices, 0x5555_5555);
    }
}
