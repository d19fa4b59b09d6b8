//! BC4 block encoding.
//!
//! Endpoints are the channel's maximum and minimum. When a sample sits on one of the
//! ramp's literal extremes the endpoints are stored as `(min, max)`, which selects the
//! ramp that contains those literals; otherwise they are stored as `(max, min)` for six
//! interpolants. Every sample then takes the closest ramp entry, lowest index on ties.
//!
//! Alpha forcing (BC3) overrides this for blocks with transparent samples; see
//! [`AlphaForcing`].

use crate::layout::{pack_indices, write_ramp_block};
use crate::BC4_BLOCK_SIZE;
use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
use dxt_block_codec_common::palette::{
    snorm_ramp, unorm_ramp, unorm_to_snorm, RAMP_LITERAL_MIN_INDEX, SNORM_MAX, SNORM_MIN,
};
use likely_stable::unlikely;

/// Marks samples of an alpha channel as transparent.
///
/// Used for BC3 alpha. Samples strictly below `threshold` decode to exactly `0`: once any
/// sample is forced, the endpoints are taken from the remaining samples and stored as
/// `(min, max)`, and forced samples are written with index `0b110` (literal `0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlphaForcing {
    /// Alpha values strictly below this are transparent.
    pub threshold: u8,
}

/// Encodes 16 unsigned samples, pixel 0 first, into a ramp channel block.
///
/// `forcing` is only meaningful for alpha channels; pass [`None`] for data channels.
pub fn encode_unorm_channel(
    values: &[u8; 16],
    forcing: Option<AlphaForcing>,
) -> [u8; BC4_BLOCK_SIZE] {
    let is_forced = |value: u8| {
        matches!(forcing, Some(AlphaForcing { threshold }) if value < threshold)
    };

    let (e0, e1) = if unlikely(values.iter().any(|&v| is_forced(v))) {
        // A fully forced channel stores (0, 0); its ramp still holds the literal 0.
        let kept = values.iter().copied().filter(|&v| !is_forced(v));
        let min = kept.clone().min().unwrap_or(0);
        let max = kept.max().unwrap_or(0);
        (min, max)
    } else {
        let (min, max) = min_max(values);
        let touches_literal = values.iter().any(|&v| v == 0 || v == 255);
        if touches_literal {
            (min, max)
        } else {
            (max, min)
        }
    };

    let ramp = unorm_ramp(e0, e1).map(|v| v as i16);
    let mut indices = [0u8; 16];
    for (index, &value) in indices.iter_mut().zip(values.iter()) {
        *index = if is_forced(value) {
            RAMP_LITERAL_MIN_INDEX
        } else {
            closest_ramp_index(value as i16, &ramp)
        };
    }

    write_ramp_block(e0, e1, pack_indices(&indices))
}

/// Encodes 16 signed samples, pixel 0 first, into a SNORM ramp channel block.
///
/// `-128` is treated as `-127`.
pub fn encode_snorm_channel(values: &[i8; 16]) -> [u8; BC4_BLOCK_SIZE] {
    let values = values.map(|v| v.max(SNORM_MIN));
    let (min, max) = min_max(&values);
    let touches_literal = values.iter().any(|&v| v == SNORM_MIN || v == SNORM_MAX);
    let (e0, e1) = if touches_literal { (min, max) } else { (max, min) };

    let ramp = snorm_ramp(e0, e1).map(|v| v as i16);
    let mut indices = [0u8; 16];
    for (index, &value) in indices.iter_mut().zip(values.iter()) {
        *index = closest_ramp_index(value as i16, &ramp);
    }

    write_ramp_block(e0 as u8, e1 as u8, pack_indices(&indices))
}

/// Encodes the red channel of a block as BC4 UNORM.
///
/// # Example
///
/// ```
/// use dxt_block_codec_bc4::{decode_bc4_block, encode_bc4_block};
/// use dxt_block_codec_common::color_8888::Color8888;
/// use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
///
/// let block = Decoded4x4Block::new(Color8888::new(77, 1, 2, 3));
/// let decoded = decode_bc4_block(&encode_bc4_block(&block));
/// assert!(decoded.pixels.iter().all(|p| p.r == 77));
/// ```
pub fn encode_bc4_block(block: &Decoded4x4Block) -> [u8; BC4_BLOCK_SIZE] {
    encode_unorm_channel(&block.pixels.map(|p| p.r), None)
}

/// Encodes the red channel of a block as BC4 SNORM, mapping 0-255 onto -127..127 first.
pub fn encode_bc4_signed_block(block: &Decoded4x4Block) -> [u8; BC4_BLOCK_SIZE] {
    encode_snorm_channel(&block.pixels.map(|p| unorm_to_snorm(p.r)))
}

/// Index of the ramp entry closest to `value` by absolute difference; first minimum wins.
#[inline]
pub fn closest_ramp_index(value: i16, ramp: &[i16; 8]) -> u8 {
    let mut best_index = 0;
    let mut best_distance = i16::MAX;
    for (index, &entry) in ramp.iter().enumerate() {
        let distance = (value - entry).abs();
        if distance < best_distance {
            best_distance = distance;
            best_index = index as u8;
        }
    }
    best_index
}

#[inline(always)]
fn min_max<T: Copy + Ord>(values: &[T; 16]) -> (T, T) {
    values
        .iter()
        .fold((values[0], values[0]), |(min, max), &v| (min.min(v), max.max(v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{index_at, read_ramp_block};
    use crate::test_prelude::*;

    #[rstest]
    #[case::zero(0)]
    #[case::mid(128)]
    #[case::full(255)]
    fn uniform_unorm_channel_is_exact(#[case] value: u8) {
        let block = encode_unorm_channel(&[value; 16], None);
        assert_eq!(decode_unorm_channel(&block), [value; 16]);
    }

    #[rstest]
    #[case::min(-127)]
    #[case::zero(0)]
    #[case::max(127)]
    fn uniform_snorm_channel_is_exact(#[case] value: i8) {
        let block = encode_snorm_channel(&[value; 16]);
        assert_eq!(decode_snorm_channel(&block), [value; 16]);
    }

    #[test]
    fn interior_samples_use_eight_value_ramp() {
        let mut values = [100u8; 16];
        values[3] = 30;
        values[9] = 170;
        let (e0, e1, _) = read_ramp_block(&encode_unorm_channel(&values, None));
        assert_eq!((e0, e1), (170, 30));
    }

    #[test]
    fn extreme_samples_use_literal_ramp() {
        let mut values = [100u8; 16];
        values[0] = 0;
        values[1] = 255;
        let block = encode_unorm_channel(&values, None);
        let (e0, e1, indices) = read_ramp_block(&block);
        assert_eq!((e0, e1), (0, 255));

        let decoded = decode_unorm_channel(&block);
        assert_eq!(decoded[0], 0);
        assert_eq!(decoded[1], 255);
        // Ramp is [0, 255, 51, 102, 153, 204, 0, 255]; 100 lands on 102.
        assert_eq!(index_at(indices, 2), 3);
        assert_eq!(decoded[2], 102);
    }

    #[test]
    fn endpoint_samples_decode_exactly() {
        let values: [u8; 16] = core::array::from_fn(|i| 20 + (i as u8) * 10);
        let decoded = decode_unorm_channel(&encode_unorm_channel(&values, None));
        assert_eq!(decoded[0], 20);
        assert_eq!(decoded[15], 170);
        for (original, decoded) in values.iter().zip(decoded.iter()) {
            assert!(original.abs_diff(*decoded) <= 11);
        }
    }

    #[test]
    fn forcing_uses_literal_zero_when_available() {
        let mut values = [255u8; 16];
        values[4] = 40;
        let block = encode_unorm_channel(&values, Some(AlphaForcing { threshold: 128 }));
        let (_, _, indices) = read_ramp_block(&block);
        assert_eq!(index_at(indices, 4), 0b110);
        assert_eq!(decode_unorm_channel(&block)[4], 0);
    }

    #[test]
    fn forced_samples_decode_to_zero_without_literal_samples() {
        let mut values = [200u8; 16];
        values[4] = 40;
        values[9] = 150;
        let block = encode_unorm_channel(&values, Some(AlphaForcing { threshold: 128 }));
        let (e0, e1, indices) = read_ramp_block(&block);
        // Endpoints come from the unforced samples only.
        assert_eq!((e0, e1), (150, 200));
        assert_eq!(index_at(indices, 4), 0b110);

        let decoded = decode_unorm_channel(&block);
        assert_eq!(decoded[4], 0);
        assert_eq!(decoded[0], 200);
        assert_eq!(decoded[9], 150);
    }

    #[test]
    fn fully_forced_channel_decodes_to_zero() {
        let values = [10u8; 16];
        let block = encode_unorm_channel(&values, Some(AlphaForcing { threshold: 128 }));
        assert_eq!(decode_unorm_channel(&block), [0; 16]);
    }

    #[test]
    fn data_channels_are_not_forced() {
        let mut values = [200u8; 16];
        values[4] = 40;
        let block = encode_unorm_channel(&values, None);
        let (_, _, indices) = read_ramp_block(&block);
        assert_eq!(index_at(indices, 4), 1);
        assert_eq!(decode_unorm_channel(&block)[4], 40);
    }

    #[test]
    fn ties_take_lowest_index() {
        let ramp = [10, 20, 10, 20, 10, 20, 10, 20];
        assert_eq!(closest_ramp_index(15, &ramp), 0);
        assert_eq!(closest_ramp_index(20, &ramp), 1);
    }

    #[test]
    fn snorm_minus_128_is_clamped() {
        let mut values = [0i8; 16];
        values[0] = -128;
        let (e0, e1, _) = read_ramp_block(&encode_snorm_channel(&values));
        assert_eq!((e0 as i8, e1 as i8), (-127, 0));
    }

    #[test]
    fn signed_block_round_trips_extremes() {
        let mut block = Decoded4x4Block::new(Color8888::new(255, 0, 0, 255));
        block.pixels[0] = Color8888::new(0, 0, 0, 255);
        let decoded = decode_bc4_signed_block(&encode_bc4_signed_block(&block));
        assert_eq!(decoded.pixels[0].r, 0);
        assert_eq!(decoded.pixels[1].r, 255);
    }
}
