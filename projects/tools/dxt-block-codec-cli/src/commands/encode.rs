use crate::error::CliError;
use crate::util::{describe_throughput, parse_dds_format};
use argh::FromArgs;
use dxt_block_codec_api::{EncodeSettings, RgbaImage, DEFAULT_ALPHA_THRESHOLD};
use dxt_block_codec_dds::{write_dds, DdsFormat, DdsWriteOptions};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(FromArgs, Debug)]
/// Encode an image (PNG) into a DDS file
#[argh(subcommand, name = "encode")]
pub struct EncodeCmd {
    /// input image path
    #[argh(option)]
    pub input: PathBuf,

    /// output DDS path
    #[argh(option)]
    pub output: PathBuf,

    /// output format: bc1-bc5, bc4s, bc5s, dxt1-dxt5 or an uncompressed layout such as a8r8g8b8
    #[argh(option, from_str_fn(parse_dds_format))]
    pub format: DdsFormat,

    /// alpha below this is transparent for BC1 and BC3 [default: 128]
    #[argh(option, default = "DEFAULT_ALPHA_THRESHOLD")]
    pub alpha_threshold: u8,

    /// encode BC1 as fully opaque, ignoring alpha
    #[argh(switch)]
    pub no_punch_through: bool,

    /// write a DX10 extension header
    #[argh(switch)]
    pub dx10: bool,

    /// allow sizes that are not multiples of 4 by repeating the last row and column
    #[argh(switch)]
    pub pad: bool,
}

pub fn handle_encode_command(cmd: EncodeCmd) -> Result<(), CliError> {
    let source = image::open(&cmd.input)?.into_rgba8();
    let (width, height) = source.dimensions();
    let image = RgbaImage::new(width, height, source.into_raw())?;
    info!(
        "Loaded {} ({width}x{height}), encoding as {}",
        cmd.input.display(),
        cmd.format
    );

    let settings = EncodeSettings::new()
        .with_alpha_threshold(cmd.alpha_threshold)
        .with_bc1_punch_through(!cmd.no_punch_through);
    let options = DdsWriteOptions::new(cmd.format)
        .with_dx10_header(cmd.dx10)
        .with_padding(cmd.pad)
        .with_encode_settings(settings);

    let start = Instant::now();
    let writer = BufWriter::new(File::create(&cmd.output)?);
    let written = write_dds(writer, &image, &options)?;

    println!(
        "Wrote {}: {}",
        cmd.output.display(),
        describe_throughput(written, start.elapsed())
    );
    Ok(())
}
