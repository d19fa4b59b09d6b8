//! Encoder configuration.

use dxt_block_codec_bc1::AlphaHandling;
use dxt_block_codec_common::DEFAULT_ALPHA_THRESHOLD;

/// Settings shared by every encode operation.
///
/// ```
/// use dxt_block_codec_api::EncodeSettings;
///
/// let settings = EncodeSettings::new()
///     .with_alpha_threshold(100)
///     .with_bc1_punch_through(false);
/// assert_eq!(settings.alpha_threshold(), 100);
/// assert!(!settings.bc1_punch_through());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodeSettings {
    alpha_threshold: u8,
    bc1_punch_through: bool,
}

impl EncodeSettings {
    /// Create settings with the default values.
    pub const fn new() -> Self {
        Self {
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            bc1_punch_through: true,
        }
    }

    /// Set the alpha threshold.
    ///
    /// Pixels with alpha strictly below this are transparent: BC1 writes them with the
    /// transparent palette slot (when punch-through is enabled) and BC3 pins them to the
    /// alpha ramp's transparent index. `0` disables both. Default: `128`.
    pub const fn with_alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = threshold;
        self
    }

    /// Set whether BC1 encodes 1-bit alpha. When disabled, BC1 ignores alpha entirely.
    /// Default: `true`.
    pub const fn with_bc1_punch_through(mut self, enabled: bool) -> Self {
        self.bc1_punch_through = enabled;
        self
    }

    /// The alpha threshold.
    pub const fn alpha_threshold(&self) -> u8 {
        self.alpha_threshold
    }

    /// Whether BC1 encodes 1-bit alpha.
    pub const fn bc1_punch_through(&self) -> bool {
        self.bc1_punch_through
    }

    pub(crate) const fn bc1_alpha_handling(&self) -> AlphaHandling {
        if self.bc1_punch_through {
            AlphaHandling::PunchThrough {
                threshold: self.alpha_threshold,
            }
        } else {
            AlphaHandling::ForceOpaque
        }
    }
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self::new()
    }
}
