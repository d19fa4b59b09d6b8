//! # Palettes and Ramps
//!
//! Every BC format stores two endpoints per channel group and derives the remaining
//! palette entries from them. The decoder is the reference for these formulas; the
//! encoders in this workspace call the same functions when choosing indices, which
//! keeps their output bit compatible with what a decoder reconstructs.
//!
//! - [`color_palette`]: the 4 entry RGB palette of BC1 and the colour half of BC2/BC3.
//! - [`unorm_ramp`]: the 8 entry intensity ramp of BC3 alpha and unsigned BC4/BC5.
//! - [`snorm_ramp`]: the signed variant used by BC4/BC5 SNORM.

use crate::color_565::Color565;
use crate::color_8888::Color8888;

/// Which of the two colour palettes a block uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteMode {
    /// Two endpoints plus the 1/3 and 2/3 interpolants.
    FourColor,
    /// Two endpoints, their midpoint and transparent black in slot 3.
    ThreeColor,
}

impl PaletteMode {
    /// The mode a BC1 decoder infers from the stored endpoint order.
    ///
    /// `endpoint0 > endpoint1` selects [`PaletteMode::FourColor`], anything else
    /// (including equal endpoints) selects [`PaletteMode::ThreeColor`].
    #[inline]
    pub const fn for_bc1_endpoints(c0: Color565, c1: Color565) -> Self {
        if c0.greater_than(&c1) {
            Self::FourColor
        } else {
            Self::ThreeColor
        }
    }
}

/// Index of the transparent entry in a [`PaletteMode::ThreeColor`] palette.
pub const TRANSPARENT_INDEX: u32 = 0b11;

/// Index of the literal `0` in a 4 interpolant ramp (`e0 <= e1`). The BC3 encoder writes
/// it for transparent pixels.
pub const RAMP_LITERAL_MIN_INDEX: u8 = 0b110;

/// Lowest value a SNORM ramp can represent. `-128` is clamped to this.
pub const SNORM_MIN: i8 = -127;

/// Highest value a SNORM ramp can represent.
pub const SNORM_MAX: i8 = 127;

/// Builds the 4 entry colour palette for two endpoints.
///
/// Interpolation runs on the expanded 8-bit channels with truncating integer division.
///
/// # Examples
///
/// ```
/// use dxt_block_codec_common::color_565::Color565;
/// use dxt_block_codec_common::palette::{color_palette, PaletteMode};
///
/// let white = Color565::from_raw(0xFFFF);
/// let black = Color565::from_raw(0x0000);
/// let palette = color_palette(white, black, PaletteMode::FourColor);
/// assert_eq!(palette[2].r, 170);
/// assert_eq!(palette[3].r, 85);
/// ```
#[inline]
pub fn color_palette(c0: Color565, c1: Color565, mode: PaletteMode) -> [Color8888; 4] {
    let p0 = c0.to_color_8888();
    let p1 = c1.to_color_8888();

    match mode {
        PaletteMode::FourColor => [p0, p1, interpolate_third(p0, p1), interpolate_third(p1, p0)],
        PaletteMode::ThreeColor => [p0, p1, midpoint(p0, p1), Color8888::TRANSPARENT],
    }
}

/// `(2a + b) / 3` per RGB channel.
#[inline(always)]
fn interpolate_third(a: Color8888, b: Color8888) -> Color8888 {
    #[inline(always)]
    fn lerp(a: u8, b: u8) -> u8 {
        ((2 * a as u32 + b as u32) / 3) as u8
    }
    Color8888::new(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b), 255)
}

/// `(a + b) / 2` per RGB channel.
#[inline(always)]
fn midpoint(a: Color8888, b: Color8888) -> Color8888 {
    #[inline(always)]
    fn mid(a: u8, b: u8) -> u8 {
        ((a as u32 + b as u32) / 2) as u8
    }
    Color8888::new(mid(a.r, b.r), mid(a.g, b.g), mid(a.b, b.b), 255)
}

/// Builds the 8 entry unsigned ramp used by BC3 alpha and BC4/BC5 UNORM channels.
///
/// If `e0 > e1` entries 2-7 hold six interpolants in sevenths. Otherwise entries 2-5
/// hold four interpolants in fifths, entry 6 is `0` and entry 7 is `255`.
///
/// # Examples
///
/// ```
/// use dxt_block_codec_common::palette::unorm_ramp;
///
/// assert_eq!(unorm_ramp(255, 0), [255, 0, 218, 182, 145, 109, 72, 36]);
/// assert_eq!(unorm_ramp(0, 255), [0, 255, 51, 102, 153, 204, 0, 255]);
/// ```
#[inline]
pub fn unorm_ramp(e0: u8, e1: u8) -> [u8; 8] {
    let a = e0 as u32;
    let b = e1 as u32;
    let mut ramp = [e0, e1, 0, 0, 0, 0, 0, 255];

    if e0 > e1 {
        for i in 1..=6u32 {
            ramp[i as usize + 1] = (((7 - i) * a + i * b) / 7) as u8;
        }
    } else {
        for i in 1..=4u32 {
            ramp[i as usize + 1] = (((5 - i) * a + i * b) / 5) as u8;
        }
    }

    ramp
}

/// Builds the 8 entry signed ramp used by BC4/BC5 SNORM channels.
///
/// Endpoints of `-128` are read as `-127`. Interpolants are computed in `f32` and
/// truncated toward zero. The literal slots of the 4 interpolant mode hold `-127` and `127`.
///
/// # Examples
///
/// ```
/// use dxt_block_codec_common::palette::snorm_ramp;
///
/// assert_eq!(snorm_ramp(127, -127), [127, -127, 90, 54, 18, -18, -54, -90]);
/// assert_eq!(snorm_ramp(-128, 127)[0], -127);
/// ```
#[inline]
pub fn snorm_ramp(e0: i8, e1: i8) -> [i8; 8] {
    let e0 = e0.max(SNORM_MIN);
    let e1 = e1.max(SNORM_MIN);
    let a = e0 as f32;
    let b = e1 as f32;
    let mut ramp = [e0, e1, 0, 0, 0, 0, SNORM_MIN, SNORM_MAX];

    if e0 > e1 {
        for i in 1..=6u8 {
            let w = i as f32;
            ramp[i as usize + 1] = (((7.0 - w) * a + w * b) / 7.0) as i8;
        }
    } else {
        for i in 1..=4u8 {
            let w = i as f32;
            ramp[i as usize + 1] = (((5.0 - w) * a + w * b) / 5.0) as i8;
        }
    }

    ramp
}

/// Maps a SNORM sample onto the 0-255 range: `((s + 127) * 255 + 127) / 254`.
#[inline]
pub const fn snorm_to_unorm(value: i8) -> u8 {
    let s = if value < SNORM_MIN { SNORM_MIN as i32 } else { value as i32 };
    (((s + 127) * 255 + 127) / 254) as u8
}

/// Maps a 0-255 sample onto the SNORM range: `(u / 255 * 2 - 1) * 127`, truncated.
#[inline]
pub fn unorm_to_snorm(value: u8) -> i8 {
    ((value as f32 / 255.0 * 2.0 - 1.0) * 127.0) as i8
}
