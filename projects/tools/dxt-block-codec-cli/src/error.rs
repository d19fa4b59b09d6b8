use dxt_block_codec_api::CodecError;
use dxt_block_codec_dds::DdsError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Dds(#[from] DdsError),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
