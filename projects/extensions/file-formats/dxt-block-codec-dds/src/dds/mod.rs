/// Shared constants between modules.
pub(crate) mod constants;

/// Determine if a file is a DDS file.
pub mod likely_dds;

/// Parse the DDS headers.
pub mod parse_dds;

/// Uncompressed RGB pixel layouts.
pub mod pixel_layout;

/// Decode a mip level of a DDS file.
pub mod read_dds;

/// Encode an image as a DDS file.
pub mod write_dds;

pub use likely_dds::*;
pub use parse_dds::*;
pub use pixel_layout::PixelLayout;
pub use read_dds::*;
pub use write_dds::*;
