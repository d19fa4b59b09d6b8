#![no_main]

// Decodes arbitrary bytes as every block format. Decoding never fails on a full block, and
// BC1 only produces transparent pixels in three colour mode through index 3.

use derive_enum_all_values::AllValues;
use dxt_block_codec_api::{decode_block, BlockFormat};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct RawBlock {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: RawBlock| {
    for &format in BlockFormat::all_values() {
        let bytes = &block.bytes[..format.block_size()];
        let decoded = decode_block(bytes, format)
            .unwrap_or_else(|e| panic!("{format} block failed to decode: {e}"));

        if format == BlockFormat::Bc1 {
            let c0 = u16::from_le_bytes([bytes[0], bytes[1]]);
            let c1 = u16::from_le_bytes([bytes[2], bytes[3]]);
            let indices = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
            for (i, pixel) in decoded.pixels.iter().enumerate() {
                let transparent = c0 <= c1 && (indices >> (i * 2)) & 0b11 == 3;
                assert_eq!(pixel.a, if transparent { 0 } else { 255 }, "pixel {i} of {bytes:?}");
            }
        }
    }
});
