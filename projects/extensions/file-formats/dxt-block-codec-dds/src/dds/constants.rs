//! DDS format constants and definitions

/// Magic header for DDS files
pub(crate) const DDS_MAGIC: [u8; 4] = *b"DDS ";

/// Value of the `dwSize` header field.
pub(crate) const DDS_HEADER_STRUCT_SIZE: u32 = 124;
/// Value of the `dwSize` pixel format field.
pub(crate) const DDS_PIXELFORMAT_STRUCT_SIZE: u32 = 32;

// Size of the regular DDS header, magic included
pub(crate) const DDS_HEADER_SIZE: usize = 0x80;
pub(crate) const DX10_HEADER_SIZE: usize = 20;

// DDS header field offsets
pub(crate) const DDS_SIZE_OFFSET: usize = 0x04;
pub(crate) const DDS_FLAGS_OFFSET: usize = 0x08;
pub(crate) const DDS_HEIGHT_OFFSET: usize = 0x0C;
pub(crate) const DDS_WIDTH_OFFSET: usize = 0x10;
pub(crate) const DDS_PITCH_OR_LINEAR_SIZE_OFFSET: usize = 0x14;
pub(crate) const DDS_MIPMAP_COUNT_OFFSET: usize = 0x1C;
pub(crate) const DDS_CAPS_OFFSET: usize = 0x6C;

// DDS pixel format offsets (within the 32-byte DDSPIXELFORMAT structure at offset 0x4C)
pub(crate) const DDS_PIXELFORMAT_OFFSET: usize = 0x4C;
pub(crate) const DDS_PIXELFORMAT_FLAGS_OFFSET: usize = 0x50;
/// Offset of the FOURCC header used in DX9 and below.
pub(crate) const FOURCC_OFFSET: usize = 0x54;
pub(crate) const DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET: usize = 0x58;
pub(crate) const DDS_PIXELFORMAT_RBITMASK_OFFSET: usize = 0x5C;
pub(crate) const DDS_PIXELFORMAT_GBITMASK_OFFSET: usize = 0x60;
pub(crate) const DDS_PIXELFORMAT_BBITMASK_OFFSET: usize = 0x64;
pub(crate) const DDS_PIXELFORMAT_ABITMASK_OFFSET: usize = 0x68;

/// Offset of the DXGI format header used in DX10 and above.
pub(crate) const DX10_FORMAT_OFFSET: usize = 0x80;
pub(crate) const DX10_RESOURCE_DIMENSION_OFFSET: usize = 0x84;
pub(crate) const DX10_ARRAY_SIZE_OFFSET: usize = 0x8C;

// DDS header flags
pub(crate) const DDSD_CAPS: u32 = 0x1;
pub(crate) const DDSD_HEIGHT: u32 = 0x2;
pub(crate) const DDSD_WIDTH: u32 = 0x4;
pub(crate) const DDSD_PITCH: u32 = 0x8;
pub(crate) const DDSD_PIXELFORMAT: u32 = 0x1000;
pub(crate) const DDSD_MIPMAPCOUNT: u32 = 0x20000;
pub(crate) const DDSD_LINEARSIZE: u32 = 0x80000;

// DDS caps
pub(crate) const DDSCAPS_TEXTURE: u32 = 0x1000;

// DDS pixel format flags
pub(crate) const DDPF_ALPHAPIXELS: u32 = 0x1;
pub(crate) const DDPF_FOURCC: u32 = 0x4;
pub(crate) const DDPF_RGB: u32 = 0x40;

// FourCC codes, stored as the raw bytes found in the file
pub(crate) const FOURCC_DXT1: [u8; 4] = *b"DXT1";
pub(crate) const FOURCC_DXT2: [u8; 4] = *b"DXT2";
pub(crate) const FOURCC_DXT3: [u8; 4] = *b"DXT3";
pub(crate) const FOURCC_DXT4: [u8; 4] = *b"DXT4";
pub(crate) const FOURCC_DXT5: [u8; 4] = *b"DXT5";
pub(crate) const FOURCC_ATI1: [u8; 4] = *b"ATI1";
pub(crate) const FOURCC_ATI2: [u8; 4] = *b"ATI2";
pub(crate) const FOURCC_BC4U: [u8; 4] = *b"BC4U";
pub(crate) const FOURCC_BC4S: [u8; 4] = *b"BC4S";
pub(crate) const FOURCC_BC5U: [u8; 4] = *b"BC5U";
pub(crate) const FOURCC_BC5S: [u8; 4] = *b"BC5S";
pub(crate) const FOURCC_DX10: [u8; 4] = *b"DX10";

// DXGI format constants for DX10 header
pub(crate) const DXGI_FORMAT_R8G8B8A8_TYPELESS: u32 = 27;
pub(crate) const DXGI_FORMAT_R8G8B8A8_UNORM: u32 = 28;
pub(crate) const DXGI_FORMAT_R8G8B8A8_UNORM_SRGB: u32 = 29;

pub(crate) const DXGI_FORMAT_BC1_TYPELESS: u32 = 70;
pub(crate) const DXGI_FORMAT_BC1_UNORM: u32 = 71;
pub(crate) const DXGI_FORMAT_BC1_UNORM_SRGB: u32 = 72;

pub(crate) const DXGI_FORMAT_BC2_TYPELESS: u32 = 73;
pub(crate) const DXGI_FORMAT_BC2_UNORM: u32 = 74;
pub(crate) const DXGI_FORMAT_BC2_UNORM_SRGB: u32 = 75;

pub(crate) const DXGI_FORMAT_BC3_TYPELESS: u32 = 76;
pub(crate) const DXGI_FORMAT_BC3_UNORM: u32 = 77;
pub(crate) const DXGI_FORMAT_BC3_UNORM_SRGB: u32 = 78;

pub(crate) const DXGI_FORMAT_BC4_TYPELESS: u32 = 79;
pub(crate) const DXGI_FORMAT_BC4_UNORM: u32 = 80;
pub(crate) const DXGI_FORMAT_BC4_SNORM: u32 = 81;

pub(crate) const DXGI_FORMAT_BC5_TYPELESS: u32 = 82;
pub(crate) const DXGI_FORMAT_BC5_UNORM: u32 = 83;
pub(crate) const DXGI_FORMAT_BC5_SNORM: u32 = 84;

pub(crate) const DXGI_FORMAT_B5G6R5_UNORM: u32 = 85;
pub(crate) const DXGI_FORMAT_B5G5R5A1_UNORM: u32 = 86;
pub(crate) const DXGI_FORMAT_B8G8R8A8_UNORM: u32 = 87;
pub(crate) const DXGI_FORMAT_B8G8R8X8_UNORM: u32 = 88;
pub(crate) const DXGI_FORMAT_B8G8R8A8_TYPELESS: u32 = 90;
pub(crate) const DXGI_FORMAT_B8G8R8A8_UNORM_SRGB: u32 = 91;
pub(crate) const DXGI_FORMAT_B4G4R4A4_UNORM: u32 = 115;

pub(crate) const D3D10_RESOURCE_DIMENSION_TEXTURE2D: u32 = 3;
