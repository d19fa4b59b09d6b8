//! Single block encode and decode, dispatched on [`BlockFormat`].

use crate::error::{CodecError, CodecResult};
use crate::format::BlockFormat;
use crate::settings::EncodeSettings;
use dxt_block_codec_bc1::{decode_bc1_block_from_slice, encode_bc1_block};
use dxt_block_codec_bc2::{decode_bc2_block_from_slice, encode_bc2_block};
use dxt_block_codec_bc3::{decode_bc3_block_from_slice, encode_bc3_block};
use dxt_block_codec_bc4::{
    decode_bc4_block_from_slice, decode_bc4_signed_block_from_slice, encode_bc4_block,
    encode_bc4_signed_block,
};
use dxt_block_codec_bc5::{
    decode_bc5_block_from_slice, decode_bc5_signed_block_from_slice, encode_bc5_block,
    encode_bc5_signed_block,
};
use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;

/// Largest block size of any supported format.
pub const MAX_BLOCK_SIZE: usize = 16;

/// A single encoded block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedBlock {
    format: BlockFormat,
    bytes: [u8; MAX_BLOCK_SIZE],
}

impl EncodedBlock {
    /// The format this block was encoded as.
    #[inline]
    pub fn format(&self) -> BlockFormat {
        self.format
    }

    /// The encoded bytes; 8 or 16 depending on the format.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.format.block_size()]
    }

    #[inline]
    fn new<const N: usize>(format: BlockFormat, encoded: [u8; N]) -> Self {
        let mut bytes = [0u8; MAX_BLOCK_SIZE];
        bytes[..N].copy_from_slice(&encoded);
        Self { format, bytes }
    }
}

/// Encodes 64 bytes of row-major RGBA8888 pixels as one block.
///
/// # Errors
///
/// [`CodecError::InvalidPixelCount`] if `pixels` is not exactly 64 bytes (16 pixels).
///
/// # Example
///
/// ```
/// use dxt_block_codec_api::{encode_block, BlockFormat, EncodeSettings};
///
/// let red = [255u8, 0, 0, 255].repeat(16);
/// let block = encode_block(&red, BlockFormat::Bc1, &EncodeSettings::default())?;
/// assert_eq!(block.as_bytes(), [0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0]);
/// # Ok::<(), dxt_block_codec_api::CodecError>(())
/// ```
pub fn encode_block(
    pixels: &[u8],
    format: BlockFormat,
    settings: &EncodeSettings,
) -> CodecResult<EncodedBlock> {
    let pixels: &[u8; 64] = pixels
        .try_into()
        .map_err(|_| CodecError::InvalidPixelCount {
            expected: 64,
            actual: pixels.len(),
        })?;
    Ok(encode_decoded_block(
        &Decoded4x4Block::from_rgba_bytes(pixels),
        format,
        settings,
    ))
}

/// Encodes an already gathered block.
pub fn encode_decoded_block(
    block: &Decoded4x4Block,
    format: BlockFormat,
    settings: &EncodeSettings,
) -> EncodedBlock {
    match format {
        BlockFormat::Bc1 => EncodedBlock::new(
            format,
            encode_bc1_block(block, settings.bc1_alpha_handling()),
        ),
        BlockFormat::Bc2 => EncodedBlock::new(format, encode_bc2_block(block)),
        BlockFormat::Bc3 => {
            EncodedBlock::new(format, encode_bc3_block(block, settings.alpha_threshold()))
        }
        BlockFormat::Bc4 => EncodedBlock::new(format, encode_bc4_block(block)),
        BlockFormat::Bc4Signed => EncodedBlock::new(format, encode_bc4_signed_block(block)),
        BlockFormat::Bc5 => EncodedBlock::new(format, encode_bc5_block(block)),
        BlockFormat::Bc5Signed => EncodedBlock::new(format, encode_bc5_signed_block(block)),
    }
}

/// Decodes exactly one block.
///
/// # Errors
///
/// [`CodecError::InvalidBlockLength`] if `bytes` is not exactly [`BlockFormat::block_size`] long.
pub fn decode_block(bytes: &[u8], format: BlockFormat) -> CodecResult<Decoded4x4Block> {
    let invalid = || CodecError::InvalidBlockLength {
        format,
        expected: format.block_size(),
        actual: bytes.len(),
    };
    if bytes.len() != format.block_size() {
        return Err(invalid());
    }
    decode_block_prefix(bytes, format).ok_or_else(invalid)
}

/// Decodes the block at the start of `bytes`, ignoring anything after it.
#[inline]
pub(crate) fn decode_block_prefix(bytes: &[u8], format: BlockFormat) -> Option<Decoded4x4Block> {
    match format {
        BlockFormat::Bc1 => decode_bc1_block_from_slice(bytes),
        BlockFormat::Bc2 => decode_bc2_block_from_slice(bytes),
        BlockFormat::Bc3 => decode_bc3_block_from_slice(bytes),
        BlockFormat::Bc4 => decode_bc4_block_from_slice(bytes),
        BlockFormat::Bc4Signed => decode_bc4_signed_block_from_slice(bytes),
        BlockFormat::Bc5 => decode_bc5_block_from_slice(bytes),
        BlockFormat::Bc5Signed => decode_bc5_signed_block_from_slice(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(63)]
    #[case(65)]
    #[case(0)]
    fn encode_rejects_wrong_sample_count(#[case] len: usize) {
        let pixels = vec![0u8; len];
        assert!(matches!(
            encode_block(&pixels, BlockFormat::Bc1, &EncodeSettings::default()),
            Err(CodecError::InvalidPixelCount { expected: 64, actual }) if actual == len
        ));
    }

    #[test]
    fn encoded_block_length_matches_format() {
        let pixels = [128u8; 64];
        for format in BlockFormat::all_values().iter() {
            let block = encode_block(&pixels, *format, &EncodeSettings::default()).unwrap();
            assert_eq!(block.as_bytes().len(), format.block_size(), "{format}");
            assert_eq!(block.format(), *format);
        }
    }

    #[rstest]
    #[case(BlockFormat::Bc1, 7)]
    #[case(BlockFormat::Bc1, 9)]
    #[case(BlockFormat::Bc3, 8)]
    fn decode_rejects_wrong_length(#[case] format: BlockFormat, #[case] len: usize) {
        let bytes = vec![0u8; len];
        assert!(matches!(
            decode_block(&bytes, format),
            Err(CodecError::InvalidBlockLength { actual, .. }) if actual == len
        ));
    }

    #[rstest]
    #[case::bc1(BlockFormat::Bc1, Color8888::new(132, 65, 206, 255))]
    #[case::bc2(BlockFormat::Bc2, Color8888::new(132, 65, 206, 0x77))]
    #[case::bc3(BlockFormat::Bc3, Color8888::new(132, 65, 206, 200))]
    #[case::bc4(BlockFormat::Bc4, Color8888::new(132, 0, 0, 255))]
    #[case::bc4s(BlockFormat::Bc4Signed, Color8888::new(255, 0, 0, 255))]
    #[case::bc5(BlockFormat::Bc5, Color8888::new(132, 65, 0, 255))]
    #[case::bc5s(BlockFormat::Bc5Signed, Color8888::new(0, 255, 0, 255))]
    fn uniform_representable_block_round_trips(
        #[case] format: BlockFormat,
        #[case] pixel: Color8888,
    ) {
        let block = Decoded4x4Block::new(pixel);
        let encoded = encode_decoded_block(&block, format, &EncodeSettings::default());
        assert_eq!(decode_block(encoded.as_bytes(), format).unwrap(), block);
    }

    #[test]
    fn bc1_punch_through_can_be_disabled() {
        let block = Decoded4x4Block::new(Color8888::new(255, 255, 255, 0));
        let settings = EncodeSettings::default().with_bc1_punch_through(false);
        let encoded = encode_decoded_block(&block, BlockFormat::Bc1, &settings);
        let decoded = decode_block(encoded.as_bytes(), BlockFormat::Bc1).unwrap();
        assert!(decoded
            .pixels
            .iter()
            .all(|p| *p == Color8888::new(255, 255, 255, 255)));
    }
}
