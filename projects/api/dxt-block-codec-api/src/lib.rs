#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

// Module declarations
pub mod block;
pub mod error;
pub mod format;
pub mod image;
pub mod raster;
pub mod settings;

#[cfg(test)]
pub(crate) mod test_prelude;

// Re-export main functionality at crate root
pub use block::{decode_block, encode_block, encode_decoded_block, EncodedBlock};
pub use error::{CodecError, CodecResult};
pub use format::BlockFormat;
pub use image::RgbaImage;
pub use raster::{
    decode_image, decode_image_from_reader, encode_image, encode_image_padded,
    encode_image_to_writer,
};
pub use settings::EncodeSettings;

// Types callers need to work with single blocks.
pub use dxt_block_codec_common::color_8888::Color8888;
pub use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
pub use dxt_block_codec_common::DEFAULT_ALPHA_THRESHOLD;
