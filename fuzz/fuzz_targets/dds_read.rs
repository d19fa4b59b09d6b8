#![no_main]

// Feeds arbitrary bytes to the DDS reader. Malformed files must produce an error, not a
// panic, and any level that decodes has the dimensions the header promised.

use dxt_block_codec_dds::{parse_dds, read_dds_level};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(info) = parse_dds(data) else {
        return;
    };

    // Limit work on huge declared sizes.
    for level in 0..info.mipmap_count.min(4) {
        let Ok((width, height)) = info.mip_dimensions(level) else {
            continue;
        };
        if let Ok(image) = read_dds_level(data, &info, level) {
            assert_eq!((image.width(), image.height()), (width, height));
        }
    }
});
