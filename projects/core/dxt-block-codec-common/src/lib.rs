#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod color_565;
pub mod color_8888;
pub mod decoded_4x4_block;
pub mod palette;

/// Logging facade used by the codec crates.
///
/// With the `log` feature enabled this is the [`log`](https://docs.rs/log) crate itself,
/// otherwise a set of macros with the same names that compile to nothing.
#[cfg(feature = "log")]
pub use log;

/// No-op stand-ins for the [`log`](https://docs.rs/log) macros.
#[cfg(not(feature = "log"))]
pub mod log;

/// Alpha values strictly below this are treated as transparent by the encoders.
///
/// Affects BC1 punch-through alpha and the forced transparent index of the BC3 alpha ramp.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;
