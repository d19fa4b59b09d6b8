use crate::error::CliError;
use argh::FromArgs;
use bytesize::ByteSize;
use dxt_block_codec_dds::parse_dds;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Print the format and mip levels of a DDS file
#[argh(subcommand, name = "info")]
pub struct InfoCmd {
    /// input DDS path
    #[argh(option)]
    pub input: PathBuf,
}

pub fn handle_info_command(cmd: InfoCmd) -> Result<(), CliError> {
    let data = std::fs::read(&cmd.input)?;
    let info = parse_dds(&data)?;

    println!("File:       {}", cmd.input.display());
    println!("Format:     {}", info.format);
    println!("Size:       {}x{}", info.width, info.height);
    println!("DX10:       {}", if info.has_dx10_header { "yes" } else { "no" });
    println!("Mip levels: {}", info.mipmap_count);

    for level in 0..info.mipmap_count {
        let (width, height) = info.mip_dimensions(level)?;
        let range = info.mip_range(level)?;
        let status = if range.end <= data.len() { "" } else { " (missing)" };
        println!(
            "  {level:>2}: {width}x{height} at {:#X}, {}{status}",
            range.start,
            ByteSize(range.len() as u64)
        );
    }
    Ok(())
}
