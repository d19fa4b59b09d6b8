use crate::error::CliError;
use crate::util::describe_throughput;
use argh::FromArgs;
use dxt_block_codec_api::CodecError;
use dxt_block_codec_dds::read_dds;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

#[derive(FromArgs, Debug)]
/// Decode a DDS file into an image (PNG)
#[argh(subcommand, name = "decode")]
pub struct DecodeCmd {
    /// input DDS path
    #[argh(option)]
    pub input: PathBuf,

    /// output image path
    #[argh(option)]
    pub output: PathBuf,

    /// mip level to decode [default: 0]
    #[argh(option, default = "0")]
    pub mip: u32,
}

pub fn handle_decode_command(cmd: DecodeCmd) -> Result<(), CliError> {
    let data = std::fs::read(&cmd.input)?;

    let start = Instant::now();
    let decoded = read_dds(&data, cmd.mip)?;
    let elapsed = start.elapsed();

    let (width, height) = (decoded.width(), decoded.height());
    info!("Decoded mip level {} ({width}x{height})", cmd.mip);

    let output = image::RgbaImage::from_raw(width, height, decoded.into_raw()).ok_or(
        CodecError::InvalidDimensions {
            width,
            height,
            reason: "decoded buffer does not match the image size",
        },
    )?;
    output.save(&cmd.output)?;

    println!(
        "Wrote {}: decoded {}",
        cmd.output.display(),
        describe_throughput(data.len(), elapsed)
    );
    Ok(())
}
