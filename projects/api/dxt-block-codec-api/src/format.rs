//! Block compression format selection.

use crate::error::CodecError;
use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;

/// One of the supported block compression formats.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum BlockFormat {
    /// BC1 (DXT1): RGB with optional 1-bit alpha, 8 bytes per block.
    Bc1,
    /// BC2 (DXT2/DXT3): RGB with explicit 4-bit alpha, 16 bytes per block.
    Bc2,
    /// BC3 (DXT4/DXT5): RGB with interpolated alpha, 16 bytes per block.
    Bc3,
    /// BC4 (ATI1) UNORM: single channel, 8 bytes per block.
    Bc4,
    /// BC4 SNORM: single signed channel, 8 bytes per block.
    Bc4Signed,
    /// BC5 (ATI2) UNORM: two channels, 16 bytes per block.
    Bc5,
    /// BC5 SNORM: two signed channels, 16 bytes per block.
    Bc5Signed,
}

impl BlockFormat {
    /// Size of one encoded 4x4 block in bytes.
    #[inline]
    pub const fn block_size(self) -> usize {
        match self {
            BlockFormat::Bc1 | BlockFormat::Bc4 | BlockFormat::Bc4Signed => 8,
            BlockFormat::Bc2 | BlockFormat::Bc3 | BlockFormat::Bc5 | BlockFormat::Bc5Signed => 16,
        }
    }

    /// Canonical lowercase name; parses back through [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            BlockFormat::Bc1 => "bc1",
            BlockFormat::Bc2 => "bc2",
            BlockFormat::Bc3 => "bc3",
            BlockFormat::Bc4 => "bc4",
            BlockFormat::Bc4Signed => "bc4s",
            BlockFormat::Bc5 => "bc5",
            BlockFormat::Bc5Signed => "bc5s",
        }
    }

    /// Number of encoded bytes needed for an image of the given size.
    ///
    /// Partial edge blocks count as whole blocks. Returns [`None`] on overflow.
    pub fn encoded_size(self, width: u32, height: u32) -> Option<usize> {
        let blocks_x = (width as usize).div_ceil(4);
        let blocks_y = (height as usize).div_ceil(4);
        blocks_x
            .checked_mul(blocks_y)?
            .checked_mul(self.block_size())
    }
}

impl fmt::Display for BlockFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockFormat {
    type Err = CodecError;

    /// Parses a format name, case-insensitively. DXTn and ATIn aliases are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bc1" | "dxt1" => Ok(BlockFormat::Bc1),
            "bc2" | "dxt2" | "dxt3" => Ok(BlockFormat::Bc2),
            "bc3" | "dxt4" | "dxt5" => Ok(BlockFormat::Bc3),
            "bc4" | "bc4u" | "ati1" => Ok(BlockFormat::Bc4),
            "bc4s" => Ok(BlockFormat::Bc4Signed),
            "bc5" | "bc5u" | "ati2" => Ok(BlockFormat::Bc5),
            "bc5s" => Ok(BlockFormat::Bc5Signed),
            _ => Err(CodecError::UnsupportedFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case("bc1", BlockFormat::Bc1)]
    #[case("DXT1", BlockFormat::Bc1)]
    #[case("dxt3", BlockFormat::Bc2)]
    #[case("Dxt5", BlockFormat::Bc3)]
    #[case("ati1", BlockFormat::Bc4)]
    #[case("bc4s", BlockFormat::Bc4Signed)]
    #[case("ATI2", BlockFormat::Bc5)]
    #[case("bc5s", BlockFormat::Bc5Signed)]
    fn parses_names_and_aliases(#[case] name: &str, #[case] expected: BlockFormat) {
        assert_eq!(name.parse::<BlockFormat>().unwrap(), expected);
    }

    #[rstest]
    #[case("bc6h")]
    #[case("bc7")]
    #[case("")]
    fn rejects_unknown_names(#[case] name: &str) {
        assert!(matches!(
            name.parse::<BlockFormat>(),
            Err(CodecError::UnsupportedFormat(n)) if n == name
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for format in BlockFormat::all_values().iter() {
            assert_eq!(format.to_string().parse::<BlockFormat>().unwrap(), *format);
        }
    }

    #[rstest]
    #[case(BlockFormat::Bc1, 8, 8, 32)]
    #[case(BlockFormat::Bc3, 8, 8, 64)]
    #[case(BlockFormat::Bc4, 5, 3, 16)]
    #[case(BlockFormat::Bc5, 1, 1, 16)]
    fn encoded_size_rounds_up_to_blocks(
        #[case] format: BlockFormat,
        #[case] width: u32,
        #[case] height: u32,
        #[case] expected: usize,
    ) {
        assert_eq!(format.encoded_size(width, height), Some(expected));
    }
}
