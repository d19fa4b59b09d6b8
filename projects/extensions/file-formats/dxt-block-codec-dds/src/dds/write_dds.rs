use super::constants::*;
use super::parse_dds::DdsFormat;
use super::pixel_layout::write_pixels;
use crate::error::{DdsError, DdsResult};
use dxt_block_codec_api::{
    encode_image, encode_image_padded, CodecError, EncodeSettings, RgbaImage,
};
use dxt_block_codec_common::log::debug;
use endian_writer::{EndianWriter, LittleEndianWriter};
use std::io::Write;

/// Options for writing a DDS file.
///
/// ```
/// use dxt_block_codec_api::{BlockFormat, EncodeSettings};
/// use dxt_block_codec_dds::{DdsFormat, DdsWriteOptions};
///
/// let options = DdsWriteOptions::new(DdsFormat::Compressed(BlockFormat::Bc3))
///     .with_dx10_header(true)
///     .with_encode_settings(EncodeSettings::new().with_alpha_threshold(64));
/// assert!(options.dx10_header());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsWriteOptions {
    format: DdsFormat,
    dx10_header: bool,
    pad: bool,
    settings: EncodeSettings,
}

impl DdsWriteOptions {
    /// Options writing `format` with a legacy header, no padding and default encoder settings.
    pub const fn new(format: DdsFormat) -> Self {
        Self {
            format,
            dx10_header: false,
            pad: false,
            settings: EncodeSettings::new(),
        }
    }

    /// Set whether to write a DX10 extension header. Default: `false`.
    pub const fn with_dx10_header(mut self, enabled: bool) -> Self {
        self.dx10_header = enabled;
        self
    }

    /// Set whether block-compressed output accepts sizes that are not multiples of 4,
    /// filling edge blocks by repeating the last row and column. Default: `false`.
    pub const fn with_padding(mut self, enabled: bool) -> Self {
        self.pad = enabled;
        self
    }

    /// Set the encoder settings used for block-compressed output.
    pub const fn with_encode_settings(mut self, settings: EncodeSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The output format.
    pub const fn format(&self) -> DdsFormat {
        self.format
    }

    /// Whether a DX10 extension header is written.
    pub const fn dx10_header(&self) -> bool {
        self.dx10_header
    }

    /// Whether padding is enabled.
    pub const fn padding(&self) -> bool {
        self.pad
    }

    /// The encoder settings.
    pub const fn encode_settings(&self) -> &EncodeSettings {
        &self.settings
    }
}

/// Encodes `image` as a single level DDS file in memory.
///
/// # Errors
///
/// - [`DdsError::NoDxgiFormat`] if a DX10 header is requested for a format without a DXGI code.
/// - [`DdsError::Codec`] if the image is empty, or block compression rejects its size
///   (see [`DdsWriteOptions::with_padding`]).
pub fn encode_dds(image: &RgbaImage, options: &DdsWriteOptions) -> DdsResult<Vec<u8>> {
    if image.width() == 0 || image.height() == 0 {
        return Err(DdsError::Codec(CodecError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
            reason: "DDS images cannot be empty",
        }));
    }

    let (header, header_len) = build_header(image.width(), image.height(), options)?;

    let pixels = match options.format {
        DdsFormat::Compressed(format) if options.pad => {
            encode_image_padded(image, format, &options.settings)?
        }
        DdsFormat::Compressed(format) => encode_image(image, format, &options.settings)?,
        DdsFormat::Uncompressed(layout) => write_pixels(image.as_bytes(), layout),
    };

    debug!(
        "Writing {}x{} {} DDS ({} header bytes, {} data bytes)",
        image.width(),
        image.height(),
        options.format,
        header_len,
        pixels.len()
    );

    let mut output = Vec::with_capacity(header_len + pixels.len());
    output.extend_from_slice(&header[..header_len]);
    output.extend_from_slice(&pixels);
    Ok(output)
}

/// Encodes `image` like [`encode_dds`] and writes the file to `writer`.
///
/// Returns the number of bytes written.
pub fn write_dds<W: Write>(
    mut writer: W,
    image: &RgbaImage,
    options: &DdsWriteOptions,
) -> DdsResult<usize> {
    let file = encode_dds(image, options)?;
    writer.write_all(&file)?;
    Ok(file.len())
}

/// Builds the legacy header and, if requested, the DX10 header.
///
/// Returns the header buffer and how many bytes of it are used.
fn build_header(
    width: u32,
    height: u32,
    options: &DdsWriteOptions,
) -> DdsResult<([u8; DDS_HEADER_SIZE + DX10_HEADER_SIZE], usize)> {
    let format = options.format;
    let dxgi_format = if options.dx10_header {
        Some(format.dxgi_format().ok_or(DdsError::NoDxgiFormat(format))?)
    } else {
        None
    };

    let (size_flag, pitch_or_linear_size) = match format {
        DdsFormat::Compressed(block_format) => (
            DDSD_LINEARSIZE,
            block_format
                .encoded_size(width, height)
                .and_then(|size| u32::try_from(size).ok())
                .unwrap_or(u32::MAX),
        ),
        DdsFormat::Uncompressed(layout) => (DDSD_PITCH, layout.pitch(width)),
    };

    let mut header = [0u8; DDS_HEADER_SIZE + DX10_HEADER_SIZE];
    header[..4].copy_from_slice(&DDS_MAGIC);

    // SAFETY: Every offset written below is at most DX10_ARRAY_SIZE_OFFSET (0x8C) + 4,
    // which is within the 148 byte buffer.
    let mut writer = unsafe { LittleEndianWriter::new(header.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(DDS_HEADER_STRUCT_SIZE, DDS_SIZE_OFFSET as isize);
        writer.write_u32_at(
            DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT | size_flag,
            DDS_FLAGS_OFFSET as isize,
        );
        writer.write_u32_at(height, DDS_HEIGHT_OFFSET as isize);
        writer.write_u32_at(width, DDS_WIDTH_OFFSET as isize);
        writer.write_u32_at(pitch_or_linear_size, DDS_PITCH_OR_LINEAR_SIZE_OFFSET as isize);
        writer.write_u32_at(1, DDS_MIPMAP_COUNT_OFFSET as isize);
        writer.write_u32_at(DDS_PIXELFORMAT_STRUCT_SIZE, DDS_PIXELFORMAT_OFFSET as isize);
        writer.write_u32_at(DDSCAPS_TEXTURE, DDS_CAPS_OFFSET as isize);
    }

    match (dxgi_format, format) {
        (Some(dxgi_format), _) => {
            unsafe {
                writer.write_u32_at(u32::from_le_bytes(FOURCC_DX10), FOURCC_OFFSET as isize);
                writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
                writer.write_u32_at(dxgi_format, DX10_FORMAT_OFFSET as isize);
                writer.write_u32_at(
                    D3D10_RESOURCE_DIMENSION_TEXTURE2D,
                    DX10_RESOURCE_DIMENSION_OFFSET as isize,
                );
                writer.write_u32_at(1, DX10_ARRAY_SIZE_OFFSET as isize);
            }
        }
        (None, DdsFormat::Compressed(_)) => {
            let fourcc = format.fourcc().unwrap_or_default();
            unsafe {
                writer.write_u32_at(u32::from_le_bytes(fourcc), FOURCC_OFFSET as isize);
                writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
            }
        }
        (None, DdsFormat::Uncompressed(layout)) => {
            let alpha_flag = if layout.has_alpha() { DDPF_ALPHAPIXELS } else { 0 };
            let [r_mask, g_mask, b_mask, a_mask] = layout.masks();
            unsafe {
                writer.write_u32_at(DDPF_RGB | alpha_flag, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
                writer.write_u32_at(
                    layout.bits_per_pixel(),
                    DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize,
                );
                writer.write_u32_at(r_mask, DDS_PIXELFORMAT_RBITMASK_OFFSET as isize);
                writer.write_u32_at(g_mask, DDS_PIXELFORMAT_GBITMASK_OFFSET as isize);
                writer.write_u32_at(b_mask, DDS_PIXELFORMAT_BBITMASK_OFFSET as isize);
                writer.write_u32_at(a_mask, DDS_PIXELFORMAT_ABITMASK_OFFSET as isize);
            }
        }
    }

    let header_len = if dxgi_format.is_some() {
        DDS_HEADER_SIZE + DX10_HEADER_SIZE
    } else {
        DDS_HEADER_SIZE
    };
    Ok((header, header_len))
}
