#![no_main]

// Encodes arbitrary pixels as BC1 with punch-through alpha and checks that transparency
// survives: pixels below the threshold decode fully transparent, all others fully opaque.

use dxt_block_codec_bc1::{decode_bc1_block, encode_bc1_block, AlphaHandling};
use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc1Input {
    pub pixels: [u8; 64],
    pub threshold: u8,
}

fuzz_target!(|input: Bc1Input| {
    let block = Decoded4x4Block::from_rgba_bytes(&input.pixels);

    let encoded = encode_bc1_block(&block, AlphaHandling::PunchThrough { threshold: input.threshold });
    let decoded = decode_bc1_block(&encoded);
    for (source, result) in block.pixels.iter().zip(decoded.pixels.iter()) {
        let expected = if source.a < input.threshold { 0 } else { 255 };
        assert_eq!(result.a, expected, "block {encoded:?} from {block:?}");
    }

    let opaque = decode_bc1_block(&encode_bc1_block(&block, AlphaHandling::ForceOpaque));
    assert!(opaque.pixels.iter().all(|p| p.a == 255));
});
