use super::parse_dds::{parse_dds, DdsFormat, DdsInfo};
use super::pixel_layout::read_pixels;
use crate::error::{DdsError, DdsResult};
use dxt_block_codec_api::{decode_image, RgbaImage};
use dxt_block_codec_common::log::debug;
use std::io::Read;

/// Decodes mip level `mip_level` of a DDS file held in memory.
///
/// Level 0 is the full size image. Data after the selected level is ignored.
///
/// # Errors
///
/// Any error of [`parse_dds`], [`DdsError::InvalidMipLevel`] if the file has fewer levels,
/// or [`DdsError::TruncatedData`] if the file ends before the level does.
pub fn read_dds(data: &[u8], mip_level: u32) -> DdsResult<RgbaImage> {
    let info = parse_dds(data)?;
    read_dds_level(data, &info, mip_level)
}

/// Reads a whole DDS stream, then decodes mip level `mip_level` like [`read_dds`].
pub fn read_dds_from<R: Read>(mut reader: R, mip_level: u32) -> DdsResult<RgbaImage> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    read_dds(&data, mip_level)
}

/// Decodes mip level `mip_level` using headers already parsed from `data`.
pub fn read_dds_level(data: &[u8], info: &DdsInfo, mip_level: u32) -> DdsResult<RgbaImage> {
    let (width, height) = info.mip_dimensions(mip_level)?;
    let range = info.mip_range(mip_level)?;
    if data.len() < range.end {
        return Err(DdsError::TruncatedData {
            expected: range.end,
            actual: data.len(),
        });
    }

    debug!(
        "Reading {} DDS level {mip_level} ({width}x{height}) at offset {}",
        info.format, range.start
    );

    let level = &data[range];
    match info.format {
        DdsFormat::Compressed(format) => Ok(decode_image(level, width, height, format)?),
        DdsFormat::Uncompressed(layout) => {
            let mut image = RgbaImage::blank(width, height)?;
            read_pixels(level, layout, image.as_bytes_mut());
            Ok(image)
        }
    }
}
