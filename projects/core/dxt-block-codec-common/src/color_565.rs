//! # RGB565 Color Format Support
//!
//! RGB565 is a 16-bit color format that packs red, green, and blue color components
//! into a single 16-bit value:
//!
//! - **Red**: 5 bits (bits 15-11)
//! - **Green**: 6 bits (bits 10-5)
//! - **Blue**: 5 bits (bits 4-0)
//!
//! It is the endpoint format of BC1, and of the colour half of BC2 and BC3.
//!
//! ## Packing and Expansion
//!
//! Packing truncates: the low bits of each 8-bit channel are shifted out.
//!
//! Expansion back to 8 bits goes through the [`EXPAND_5`] and [`EXPAND_6`] tables, which hold
//! `round(value * 255 / max)` for every 5 and 6 bit value. The encoder builds its palettes from
//! the same expanded values the decoder produces, so both sides agree bit for bit.
//!
//! ```rust
//! use dxt_block_codec_common::color_565::Color565;
//!
//! let color = Color565::from_rgb(255, 0, 0);
//! assert_eq!(color.raw_value(), 0xF800);
//! assert_eq!(color.red(), 255);
//! assert_eq!(color.green(), 0);
//! ```

use crate::color_8888::Color8888;

/// 5-bit to 8-bit expansion table (`round(i * 255 / 31)`).
pub const EXPAND_5: [u8; 32] = [
    0, 8, 16, 25, 33, 41, 49, 58, 66, 74, 82, 90, 99, 107, 115, 123, 132, 140, 148, 156, 165, 173,
    181, 189, 197, 206, 214, 222, 230, 239, 247, 255,
];

/// 6-bit to 8-bit expansion table (`round(i * 255 / 63)`).
pub const EXPAND_6: [u8; 64] = [
    0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 45, 49, 53, 57, 61, 65, 69, 73, 77, 81, 85, 89, 93,
    97, 101, 105, 109, 113, 117, 121, 125, 130, 134, 138, 142, 146, 150, 154, 158, 162, 166, 170,
    174, 178, 182, 186, 190, 194, 198, 202, 206, 210, 215, 219, 223, 227, 231, 235, 239, 243, 247,
    251, 255,
];

/// Expands a 4-bit value (BC2 explicit alpha) to 8 bits.
#[inline(always)]
pub const fn expand_4(value: u8) -> u8 {
    (value & 0x0F) * 17
}

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// As encountered in many of the BC1 formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from separate 8-bit RGB components.
    ///
    /// Components are truncated to 5/6/5 bits, not rounded.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            value: ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3),
        }
    }

    /// Creates a new [`Color565`] from the RGB components of a [`Color8888`]; alpha is dropped.
    #[inline]
    pub const fn from_color_8888(color: Color8888) -> Self {
        Self::from_rgb(color.r, color.g, color.b)
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    /// Extracts the expanded 8-bit red component (0-255)
    #[inline]
    pub const fn red(&self) -> u8 {
        EXPAND_5[((self.value & 0b11111000_00000000) >> 11) as usize]
    }

    /// Extracts the expanded 8-bit green component (0-255)
    #[inline]
    pub const fn green(&self) -> u8 {
        EXPAND_6[((self.value & 0b00000111_11100000) >> 5) as usize]
    }

    /// Extracts the expanded 8-bit blue component (0-255)
    #[inline]
    pub const fn blue(&self) -> u8 {
        EXPAND_5[(self.value & 0b00000000_00011111) as usize]
    }

    /// Compares two [`Color565`] values
    ///
    /// Returns if this value is greater than the other.
    /// In a BC1 block this comparison selects between the four colour and the
    /// three colour + transparent palettes.
    #[inline]
    pub const fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Converts this [`Color565`] to a [`Color8888`] with full opacity (alpha=255)
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_block_codec_common::color_565::Color565;
    ///
    /// let rgba8888 = Color565::from_rgb(255, 0, 0).to_color_8888();
    /// assert_eq!((rgba8888.r, rgba8888.g, rgba8888.b, rgba8888.a), (255, 0, 0, 255));
    /// ```
    #[inline]
    pub const fn to_color_8888(&self) -> Color8888 {
        self.to_color_8888_with_alpha(255)
    }

    /// Converts this RGB565 color to a RGBA8888 color with the specified alpha value
    #[inline]
    pub const fn to_color_8888_with_alpha(&self, alpha: u8) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), alpha)
    }
}
