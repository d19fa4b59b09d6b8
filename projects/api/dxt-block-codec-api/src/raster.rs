//! Whole image encode and decode.
//!
//! Blocks are visited in row-major order: left to right within a block row, block rows top
//! to bottom. Each block row is independent, so with the `rayon` feature rows are processed
//! in parallel; the output is byte-identical either way.

use crate::block::{decode_block_prefix, encode_decoded_block};
use crate::error::{CodecError, CodecResult};
use crate::format::BlockFormat;
use crate::image::{write_block_to_band, RgbaImage};
use crate::settings::EncodeSettings;
use dxt_block_codec_common::log::{debug, trace};
use multiversion::multiversion;
use std::io::{Read, Write};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Encodes an image whose width and height are multiples of 4.
///
/// # Errors
///
/// [`CodecError::InvalidDimensions`] if either dimension is zero or not a multiple of 4.
/// Use [`encode_image_padded`] for other sizes.
pub fn encode_image(
    image: &RgbaImage,
    format: BlockFormat,
    settings: &EncodeSettings,
) -> CodecResult<Vec<u8>> {
    if image.width() % 4 != 0 || image.height() % 4 != 0 {
        return Err(CodecError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
            reason: "dimensions must be multiples of 4",
        });
    }
    encode_image_padded(image, format, settings)
}

/// Encodes an image of any non-zero size.
///
/// Partial blocks on the right and bottom edges are filled by repeating the last column and
/// row of the image.
pub fn encode_image_padded(
    image: &RgbaImage,
    format: BlockFormat,
    settings: &EncodeSettings,
) -> CodecResult<Vec<u8>> {
    let (width, height) = (image.width(), image.height());
    let output_len = checked_encoded_size(width, height, format)?;
    let blocks_x = (width as usize).div_ceil(4);
    let row_len = blocks_x * format.block_size();

    debug!("Encoding {width}x{height} image as {format} ({output_len} bytes)");

    let mut output = vec![0u8; output_len];

    #[cfg(feature = "rayon")]
    let rows = output.par_chunks_mut(row_len);
    #[cfg(not(feature = "rayon"))]
    let rows = output.chunks_mut(row_len);

    rows.enumerate()
        .for_each(|(by, row)| encode_block_row(image, by, format, settings, row));

    trace!("Encoded {} block rows", height.div_ceil(4));
    Ok(output)
}

/// Decodes `data` into an image of the given size.
///
/// Only the first `encoded_size(width, height)` bytes are read; trailing bytes are ignored.
/// Pixels of partial edge blocks that fall outside the image are dropped.
///
/// # Errors
///
/// [`CodecError::InvalidDimensions`] if either dimension is zero, [`CodecError::TruncatedInput`]
/// if `data` is shorter than the image requires.
pub fn decode_image(
    data: &[u8],
    width: u32,
    height: u32,
    format: BlockFormat,
) -> CodecResult<RgbaImage> {
    let expected = checked_encoded_size(width, height, format)?;
    if data.len() < expected {
        return Err(CodecError::TruncatedInput {
            expected,
            actual: data.len(),
        });
    }
    if data.len() > expected {
        trace!("Ignoring {} trailing bytes", data.len() - expected);
    }

    debug!("Decoding {width}x{height} {format} image ({expected} bytes)");

    let mut image = RgbaImage::blank(width, height)?;
    let blocks_x = (width as usize).div_ceil(4);
    let row_len = blocks_x * format.block_size();
    let band_len = image.row_bytes() * 4;
    let data = &data[..expected];

    #[cfg(feature = "rayon")]
    let bands = image.as_bytes_mut().par_chunks_mut(band_len);
    #[cfg(not(feature = "rayon"))]
    let bands = image.as_bytes_mut().chunks_mut(band_len);

    bands
        .enumerate()
        .try_for_each(|(by, band)| {
            let row = &data[by * row_len..(by + 1) * row_len];
            decode_block_row(row, width as usize, format, band)
        })?;

    Ok(image)
}

/// Reads exactly one image worth of blocks from `reader` and decodes them.
///
/// # Errors
///
/// [`CodecError::Io`] if the stream fails or ends early, plus the errors of [`decode_image`].
pub fn decode_image_from_reader<R: Read>(
    mut reader: R,
    width: u32,
    height: u32,
    format: BlockFormat,
) -> CodecResult<RgbaImage> {
    let expected = checked_encoded_size(width, height, format)?;
    let mut data = vec![0u8; expected];
    reader.read_exact(&mut data)?;
    decode_image(&data, width, height, format)
}

/// Encodes an image and writes the blocks to `writer`.
///
/// Dimensions follow [`encode_image`] unless `padded` is set, which follows
/// [`encode_image_padded`]. Returns the number of bytes written.
pub fn encode_image_to_writer<W: Write>(
    mut writer: W,
    image: &RgbaImage,
    format: BlockFormat,
    settings: &EncodeSettings,
    padded: bool,
) -> CodecResult<usize> {
    let encoded = if padded {
        encode_image_padded(image, format, settings)?
    } else {
        encode_image(image, format, settings)?
    };
    writer.write_all(&encoded)?;
    Ok(encoded.len())
}

fn checked_encoded_size(width: u32, height: u32, format: BlockFormat) -> CodecResult<usize> {
    if width == 0 || height == 0 {
        return Err(CodecError::InvalidDimensions {
            width,
            height,
            reason: "dimensions must be non-zero",
        });
    }
    format
        .encoded_size(width, height)
        .ok_or(CodecError::InvalidDimensions {
            width,
            height,
            reason: "image is too large",
        })
}

#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
fn encode_block_row(
    image: &RgbaImage,
    by: usize,
    format: BlockFormat,
    settings: &EncodeSettings,
    row: &mut [u8],
) {
    for (bx, out) in row.chunks_exact_mut(format.block_size()).enumerate() {
        let block = image.read_block(bx, by);
        out.copy_from_slice(encode_decoded_block(&block, format, settings).as_bytes());
    }
}

#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
fn decode_block_row(
    row: &[u8],
    width: usize,
    format: BlockFormat,
    band: &mut [u8],
) -> CodecResult<()> {
    for (bx, bytes) in row.chunks_exact(format.block_size()).enumerate() {
        let block = decode_block_prefix(bytes, format).ok_or(CodecError::TruncatedInput {
            expected: format.block_size(),
            actual: bytes.len(),
        })?;
        write_block_to_band(band, width, bx, &block);
    }
    Ok(())
}
