//! Common test imports and utilities for DDS tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use derive_enum_all_values::AllValues;
pub use dxt_block_codec_api::{BlockFormat, RgbaImage};
pub use rstest::rstest;

pub use crate::dds::pixel_layout::PixelLayout;

use crate::dds::constants::*;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Creates the legacy header: magic, header size, flags, dimensions and mipmap count.
fn create_dds_header_base(width: u32, height: u32, mipmap_count: u32, len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    data[..4].copy_from_slice(&DDS_MAGIC);

    let mut flags = DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT;
    if mipmap_count > 1 {
        flags |= DDSD_MIPMAPCOUNT;
    }

    // SAFETY: `len` is at least DDS_HEADER_SIZE, all offsets are inside it.
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(DDS_HEADER_STRUCT_SIZE, DDS_SIZE_OFFSET as isize);
        writer.write_u32_at(flags, DDS_FLAGS_OFFSET as isize);
        writer.write_u32_at(height, DDS_HEIGHT_OFFSET as isize);
        writer.write_u32_at(width, DDS_WIDTH_OFFSET as isize);
        writer.write_u32_at(mipmap_count, DDS_MIPMAP_COUNT_OFFSET as isize);
        writer.write_u32_at(DDS_PIXELFORMAT_STRUCT_SIZE, DDS_PIXELFORMAT_OFFSET as isize);
    }
    data
}

/// Creates a header-only DDS file with a legacy FourCC pixel format.
pub fn create_fourcc_header(width: u32, height: u32, mipmap_count: u32, fourcc: &[u8; 4]) -> Vec<u8> {
    let mut data = create_dds_header_base(width, height, mipmap_count, DDS_HEADER_SIZE);
    data[DDS_PIXELFORMAT_FLAGS_OFFSET..DDS_PIXELFORMAT_FLAGS_OFFSET + 4]
        .copy_from_slice(&DDPF_FOURCC.to_le_bytes());
    data[FOURCC_OFFSET..FOURCC_OFFSET + 4].copy_from_slice(fourcc);
    data
}

/// Creates a header-only DDS file with a DX10 extension header.
pub fn create_dx10_header(width: u32, height: u32, mipmap_count: u32, dxgi_format: u32) -> Vec<u8> {
    let mut data = create_dds_header_base(
        width,
        height,
        mipmap_count,
        DDS_HEADER_SIZE + DX10_HEADER_SIZE,
    );
    data[DDS_PIXELFORMAT_FLAGS_OFFSET..DDS_PIXELFORMAT_FLAGS_OFFSET + 4]
        .copy_from_slice(&DDPF_FOURCC.to_le_bytes());
    data[FOURCC_OFFSET..FOURCC_OFFSET + 4].copy_from_slice(&FOURCC_DX10);
    data[DX10_FORMAT_OFFSET..DX10_FORMAT_OFFSET + 4].copy_from_slice(&dxgi_format.to_le_bytes());
    data
}

/// Creates a header-only DDS file with an uncompressed RGB pixel format.
pub fn create_rgb_header(width: u32, height: u32, layout: PixelLayout) -> Vec<u8> {
    let mut data = create_dds_header_base(width, height, 1, DDS_HEADER_SIZE);
    let flags = if layout.has_alpha() {
        DDPF_RGB | DDPF_ALPHAPIXELS
    } else {
        DDPF_RGB
    };

    let [r_mask, g_mask, b_mask, a_mask] = layout.masks();
    let fields = [
        (DDS_PIXELFORMAT_FLAGS_OFFSET, flags),
        (DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET, layout.bits_per_pixel()),
        (DDS_PIXELFORMAT_RBITMASK_OFFSET, r_mask),
        (DDS_PIXELFORMAT_GBITMASK_OFFSET, g_mask),
        (DDS_PIXELFORMAT_BBITMASK_OFFSET, b_mask),
        (DDS_PIXELFORMAT_ABITMASK_OFFSET, a_mask),
    ];
    for (offset, value) in fields {
        data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }
    data
}

/// Creates an image filled with a single RGBA colour.
pub fn solid_image(width: u32, height: u32, pixel: [u8; 4]) -> RgbaImage {
    RgbaImage::new(width, height, pixel.repeat((width * height) as usize)).unwrap()
}
