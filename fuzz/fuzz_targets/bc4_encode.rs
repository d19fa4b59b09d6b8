#![no_main]

// Encodes arbitrary samples as a BC4 channel. Every decoded sample stays inside the
// input's range and close to its source.

use dxt_block_codec_bc4::{decode_unorm_channel, encode_unorm_channel};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc4Input {
    pub values: [u8; 16],
}

fuzz_target!(|input: Bc4Input| {
    let values = &input.values;
    let min = *values.iter().min().unwrap_or(&0);
    let max = *values.iter().max().unwrap_or(&0);
    let tolerance = (max - min) / 8 + 1;

    let encoded = encode_unorm_channel(values, None);
    let decoded = decode_unorm_channel(&encoded);
    for (&source, &result) in values.iter().zip(decoded.iter()) {
        assert!(
            (min..=max).contains(&result),
            "{result} outside {min}..={max}, block {encoded:?}"
        );
        assert!(
            source.abs_diff(result) <= tolerance,
            "{source} decoded as {result}, block {encoded:?}"
        );
    }
});
