use super::pixel_layout::PixelLayout;
use super::{constants::*, likely_dds};
use crate::error::{DdsError, DdsResult};
use dxt_block_codec_api::{BlockFormat, CodecError};
use endian_writer::{EndianReader, LittleEndianReader};

/// The pixel data format stored in a DDS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DdsFormat {
    /// BC1 through BC5 blocks.
    Compressed(BlockFormat),
    /// Uncompressed RGB(A) pixels.
    Uncompressed(PixelLayout),
}

impl DdsFormat {
    /// Number of bytes one level of `width` x `height` pixels takes.
    pub fn level_size(self, width: u32, height: u32) -> Option<usize> {
        match self {
            Self::Compressed(format) => format.encoded_size(width, height),
            Self::Uncompressed(layout) => layout.encoded_size(width, height),
        }
    }

    /// FourCC written for this format in a legacy header.
    pub(crate) const fn fourcc(self) -> Option<[u8; 4]> {
        match self {
            Self::Compressed(BlockFormat::Bc1) => Some(FOURCC_DXT1),
            Self::Compressed(BlockFormat::Bc2) => Some(FOURCC_DXT3),
            Self::Compressed(BlockFormat::Bc3) => Some(FOURCC_DXT5),
            Self::Compressed(BlockFormat::Bc4) => Some(FOURCC_ATI1),
            Self::Compressed(BlockFormat::Bc4Signed) => Some(FOURCC_BC4S),
            Self::Compressed(BlockFormat::Bc5) => Some(FOURCC_ATI2),
            Self::Compressed(BlockFormat::Bc5Signed) => Some(FOURCC_BC5S),
            Self::Uncompressed(_) => None,
        }
    }

    /// DXGI format written for this format in a DX10 header.
    pub(crate) const fn dxgi_format(self) -> Option<u32> {
        match self {
            Self::Compressed(BlockFormat::Bc1) => Some(DXGI_FORMAT_BC1_UNORM),
            Self::Compressed(BlockFormat::Bc2) => Some(DXGI_FORMAT_BC2_UNORM),
            Self::Compressed(BlockFormat::Bc3) => Some(DXGI_FORMAT_BC3_UNORM),
            Self::Compressed(BlockFormat::Bc4) => Some(DXGI_FORMAT_BC4_UNORM),
            Self::Compressed(BlockFormat::Bc4Signed) => Some(DXGI_FORMAT_BC4_SNORM),
            Self::Compressed(BlockFormat::Bc5) => Some(DXGI_FORMAT_BC5_UNORM),
            Self::Compressed(BlockFormat::Bc5Signed) => Some(DXGI_FORMAT_BC5_SNORM),
            Self::Uncompressed(layout) => layout.dxgi_format(),
        }
    }

    fn from_fourcc(fourcc: [u8; 4]) -> DdsResult<Self> {
        let format = match fourcc {
            FOURCC_DXT1 => BlockFormat::Bc1,
            FOURCC_DXT2 | FOURCC_DXT3 => BlockFormat::Bc2,
            FOURCC_DXT4 | FOURCC_DXT5 => BlockFormat::Bc3,
            FOURCC_ATI1 | FOURCC_BC4U => BlockFormat::Bc4,
            FOURCC_BC4S => BlockFormat::Bc4Signed,
            FOURCC_ATI2 | FOURCC_BC5U => BlockFormat::Bc5,
            FOURCC_BC5S => BlockFormat::Bc5Signed,
            _ => return Err(DdsError::UnsupportedFourCc(fourcc)),
        };
        Ok(Self::Compressed(format))
    }

    fn from_dxgi_format(dxgi_format: u32) -> DdsResult<Self> {
        let format = match dxgi_format {
            DXGI_FORMAT_BC1_TYPELESS | DXGI_FORMAT_BC1_UNORM | DXGI_FORMAT_BC1_UNORM_SRGB => {
                BlockFormat::Bc1
            }
            DXGI_FORMAT_BC2_TYPELESS | DXGI_FORMAT_BC2_UNORM | DXGI_FORMAT_BC2_UNORM_SRGB => {
                BlockFormat::Bc2
            }
            DXGI_FORMAT_BC3_TYPELESS | DXGI_FORMAT_BC3_UNORM | DXGI_FORMAT_BC3_UNORM_SRGB => {
                BlockFormat::Bc3
            }
            DXGI_FORMAT_BC4_TYPELESS | DXGI_FORMAT_BC4_UNORM => BlockFormat::Bc4,
            DXGI_FORMAT_BC4_SNORM => BlockFormat::Bc4Signed,
            DXGI_FORMAT_BC5_TYPELESS | DXGI_FORMAT_BC5_UNORM => BlockFormat::Bc5,
            DXGI_FORMAT_BC5_SNORM => BlockFormat::Bc5Signed,
            _ => {
                return PixelLayout::from_dxgi_format(dxgi_format)
                    .map(Self::Uncompressed)
                    .ok_or(DdsError::UnsupportedDxgiFormat(dxgi_format))
            }
        };
        Ok(Self::Compressed(format))
    }
}

impl core::fmt::Display for DdsFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Compressed(format) => write!(f, "{format}"),
            Self::Uncompressed(layout) => write!(f, "{layout}"),
        }
    }
}

/// The information parsed from the headers of a DDS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsInfo {
    /// Format of the pixel data.
    pub format: DdsFormat,
    /// Width of the top level in pixels.
    pub width: u32,
    /// Height of the top level in pixels.
    pub height: u32,
    /// Number of mip levels; at least 1.
    pub mipmap_count: u32,
    /// Whether a DX10 extension header follows the legacy header.
    pub has_dx10_header: bool,
    /// Offset of the first level's pixel data.
    pub data_offset: usize,
}

impl DdsInfo {
    /// Width and height of mip level `level`, halving per level down to 1.
    pub fn mip_dimensions(&self, level: u32) -> DdsResult<(u32, u32)> {
        if level >= self.mipmap_count {
            return Err(DdsError::InvalidMipLevel {
                requested: level,
                available: self.mipmap_count,
            });
        }
        Ok((
            self.width.checked_shr(level).unwrap_or(0).max(1),
            self.height.checked_shr(level).unwrap_or(0).max(1),
        ))
    }

    /// Byte range of mip level `level` within the file.
    ///
    /// Earlier levels are skipped by their computed sizes.
    pub fn mip_range(&self, level: u32) -> DdsResult<core::ops::Range<usize>> {
        let mut offset = self.data_offset;
        for skipped in 0..level {
            offset = offset
                .checked_add(self.level_size(skipped)?)
                .ok_or(DdsError::InvalidMipLevel {
                    requested: level,
                    available: self.mipmap_count,
                })?;
        }
        let size = self.level_size(level)?;
        Ok(offset..offset.saturating_add(size))
    }

    fn level_size(&self, level: u32) -> DdsResult<usize> {
        let (width, height) = self.mip_dimensions(level)?;
        self.format
            .level_size(width, height)
            .ok_or(DdsError::Codec(CodecError::InvalidDimensions {
                width,
                height,
                reason: "mip level is too large",
            }))
    }
}

/// Parses the headers of a DDS file.
///
/// # Errors
///
/// - [`DdsError::NotADds`] if the magic is missing or the data is shorter than the headers.
/// - [`DdsError::InvalidHeaderSize`] if the header does not declare itself as 124 bytes.
/// - [`DdsError::Codec`] with [`CodecError::InvalidDimensions`] if the width or height is 0.
/// - [`DdsError::UnsupportedFourCc`], [`DdsError::UnsupportedDxgiFormat`] or
///   [`DdsError::UnsupportedPixelFormat`] if the pixel format is not one this crate handles.
///
/// # Notes
///
/// For DX10 headers, the `DXGI_FORMAT` field determines the format.
pub fn parse_dds(data: &[u8]) -> DdsResult<DdsInfo> {
    if !likely_dds(data) {
        return Err(DdsError::NotADds);
    }

    // SAFETY: likely_dds checked data.len() >= DDS_HEADER_SIZE (128); every offset read
    // below this point is at most 0x68 + 4.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let header_size = unsafe { reader.read_u32_at(DDS_SIZE_OFFSET as isize) };
    if header_size != DDS_HEADER_STRUCT_SIZE {
        return Err(DdsError::InvalidHeaderSize(header_size));
    }

    let flags = unsafe { reader.read_u32_at(DDS_FLAGS_OFFSET as isize) };
    let height = unsafe { reader.read_u32_at(DDS_HEIGHT_OFFSET as isize) };
    let width = unsafe { reader.read_u32_at(DDS_WIDTH_OFFSET as isize) };
    let raw_mipmap_count = unsafe { reader.read_u32_at(DDS_MIPMAP_COUNT_OFFSET as isize) };
    let pixel_flags = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize) };

    if width == 0 || height == 0 {
        return Err(DdsError::Codec(CodecError::InvalidDimensions {
            width,
            height,
            reason: "DDS header declares an empty image",
        }));
    }

    let mipmap_count = if (flags & DDSD_MIPMAPCOUNT) != 0 {
        raw_mipmap_count.max(1)
    } else {
        1
    };

    let mut fourcc = [0u8; 4];
    fourcc.copy_from_slice(&data[FOURCC_OFFSET..FOURCC_OFFSET + 4]);

    let (format, has_dx10_header) = if (pixel_flags & DDPF_FOURCC) != 0 {
        if fourcc == FOURCC_DX10 {
            if data.len() < DDS_HEADER_SIZE + DX10_HEADER_SIZE {
                return Err(DdsError::NotADds);
            }
            // SAFETY: We checked data.len() >= DDS_HEADER_SIZE + DX10_HEADER_SIZE (148),
            // so DX10_FORMAT_OFFSET (0x80) + 4 is in bounds.
            let dxgi_format = unsafe { reader.read_u32_at(DX10_FORMAT_OFFSET as isize) };
            (DdsFormat::from_dxgi_format(dxgi_format)?, true)
        } else {
            (DdsFormat::from_fourcc(fourcc)?, false)
        }
    } else if (pixel_flags & DDPF_RGB) != 0 {
        (DdsFormat::Uncompressed(detect_pixel_layout(data, pixel_flags)?), false)
    } else {
        // YUV, luminance and alpha-only surfaces
        return Err(DdsError::UnsupportedPixelFormat {
            flags: pixel_flags,
            bit_count: 0,
            masks: [0; 4],
        });
    };

    let data_offset = if has_dx10_header {
        DDS_HEADER_SIZE + DX10_HEADER_SIZE
    } else {
        DDS_HEADER_SIZE
    };

    Ok(DdsInfo {
        format,
        width,
        height,
        mipmap_count,
        has_dx10_header,
        data_offset,
    })
}

/// Matches the bit count and masks of an RGB pixel format against the known layouts.
///
/// # Preconditions
///
/// The caller has checked that `data` holds the full 128 byte header.
fn detect_pixel_layout(data: &[u8], pixel_flags: u32) -> DdsResult<PixelLayout> {
    // SAFETY: The last mask ends at 0x6C, inside the 128 byte header.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let (bit_count, r_mask, g_mask, b_mask, a_mask) = unsafe {
        (
            reader.read_u32_at(DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_RBITMASK_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_GBITMASK_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_BBITMASK_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_ABITMASK_OFFSET as isize),
        )
    };

    // The alpha mask only counts when the format says it has alpha.
    let a_mask = if (pixel_flags & DDPF_ALPHAPIXELS) != 0 {
        a_mask
    } else {
        0
    };

    let masks = [r_mask, g_mask, b_mask, a_mask];
    PixelLayout::from_masks(bit_count, masks).ok_or(DdsError::UnsupportedPixelFormat {
        flags: pixel_flags,
        bit_count,
        masks,
    })
}
