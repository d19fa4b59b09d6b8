/// Represents a single RGBA8888 pixel, the unit every block is encoded from and decoded into.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Fully transparent black, entry 3 of a three-colour BC1 palette.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_block_codec_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Squared euclidean distance between the RGB components of two pixels. Alpha is ignored.
    #[inline]
    pub const fn distance_squared_rgb(&self, other: &Self) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Returns `true` if this pixel's alpha is below `threshold`.
    #[inline]
    pub const fn is_transparent(&self, threshold: u8) -> bool {
        self.a < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_ignores_alpha() {
        let a = Color8888::new(10, 20, 30, 0);
        let b = Color8888::new(13, 16, 30, 255);
        assert_eq!(a.distance_squared_rgb(&b), 9 + 16);
        assert_eq!(b.distance_squared_rgb(&a), 9 + 16);
    }

    #[test]
    fn max_distance_fits() {
        let black = Color8888::new(0, 0, 0, 255);
        let white = Color8888::new(255, 255, 255, 255);
        assert_eq!(black.distance_squared_rgb(&white), 3 * 255 * 255);
    }

    #[test]
    fn transparency_threshold_is_exclusive() {
        assert!(Color8888::new(0, 0, 0, 127).is_transparent(128));
        assert!(!Color8888::new(0, 0, 0, 128).is_transparent(128));
        assert!(!Color8888::new(0, 0, 0, 0).is_transparent(0));
    }
}
