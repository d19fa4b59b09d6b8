#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;
use log::{debug, Level};

#[derive(FromArgs, Debug)]
/// Convert images to and from BC1-BC5 compressed DDS files
struct TopLevel {
    /// log what the tool is doing
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Encode(commands::encode::EncodeCmd),
    Decode(commands::decode::DecodeCmd),
    Info(commands::info::InfoCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();

    let log_level = if cli.verbose {
        Level::Debug
    } else {
        Level::Warn
    };
    simple_logger::init_with_level(log_level)?;
    debug!("Log level: {log_level}");

    match cli.command {
        Commands::Encode(cmd) => commands::encode::handle_encode_command(cmd)?,
        Commands::Decode(cmd) => commands::decode::handle_decode_command(cmd)?,
        Commands::Info(cmd) => commands::info::handle_info_command(cmd)?,
    }

    Ok(())
}
