#![cfg(not(tarpaulin_include))]

use bytesize::ByteSize;
use derive_enum_all_values::AllValues;
use dxt_block_codec_api::BlockFormat;
use dxt_block_codec_dds::{DdsFormat, PixelLayout};
use std::time::Duration;

/// Parses a DDS output format: a block format name (`bc1`, `dxt5`, `bc5s`, ...) or an
/// uncompressed layout name (`a8r8g8b8`, `r5g6b5`, ...).
pub fn parse_dds_format(value: &str) -> Result<DdsFormat, String> {
    if let Ok(format) = value.parse::<BlockFormat>() {
        return Ok(DdsFormat::Compressed(format));
    }

    PixelLayout::all_values()
        .iter()
        .find(|layout| layout.name().eq_ignore_ascii_case(value))
        .map(|layout| DdsFormat::Uncompressed(*layout))
        .ok_or_else(|| {
            let blocks: Vec<&str> = BlockFormat::all_values().iter().map(|f| f.name()).collect();
            let layouts: Vec<&str> = PixelLayout::all_values().iter().map(|l| l.name()).collect();
            format!(
                "Unknown format: {value}. Valid formats: {}, {}",
                blocks.join(", "),
                layouts.join(", ")
            )
        })
}

/// Formats a byte count and how fast it was processed.
pub fn describe_throughput(bytes: usize, elapsed: Duration) -> String {
    let per_second = if elapsed.as_secs_f64() > 0.0 {
        (bytes as f64 / elapsed.as_secs_f64()) as u64
    } else {
        0
    };
    format!(
        "{} in {elapsed:.2?} ({}/s)",
        ByteSize(bytes as u64),
        ByteSize(per_second)
    )
}
