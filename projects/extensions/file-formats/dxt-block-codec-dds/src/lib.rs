#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

/// DDS container reading and writing.
pub mod dds;
pub mod error;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use dds::*;
pub use error::{DdsError, DdsResult};
