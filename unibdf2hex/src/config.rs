use anyhow::*;
use derive_setters::Setters;
#[cfg(feature = "config_file")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "config_file")]
use std::path::Path;

/// Settings for a conversion run.
///
/// The defaults reproduce the classic `unibdf2hex` behaviour: an 8x16 cell, a descent of 4
/// pixels, and the Basic Multilingual Plane as the range of normal-width glyphs.
#[cfg_attr(feature = "config_file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config_file", serde(default, deny_unknown_fields))]
#[derive(Setters, Copy, Clone, Debug, PartialEq, Eq)]
pub struct TranscodeConfig {
    /// Base cell width used when the header has no positive `DWIDTH`.
    pub default_width: u32,
    /// Cell height used when the header has no positive `FONTBOUNDINGBOX` height.
    pub default_height: u32,
    /// Distance from the baseline to the bottom of the cell.
    pub descent: i64,
    /// First code point converted as a normal-width glyph.
    pub plane_start: u32,
    /// Last code point converted as a normal-width glyph.
    pub plane_end: u32,
    /// Input lines are truncated to this many bytes.
    pub max_line_len: usize,
    /// Report malformed fields and truncated glyphs as errors instead of skipping past them.
    pub strict: bool,
}
impl Default for TranscodeConfig {
    fn default() -> Self {
        TranscodeConfig {
            default_width: 8,
            default_height: 16,
            descent: 4,
            plane_start: 0x0000,
            plane_end: 0xFFFF,
            max_line_len: 255,
            strict: false,
        }
    }
}
impl TranscodeConfig {
    /// Checks that the configuration describes a usable grid.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.default_width > 0, "`default_width` must be positive.");
        ensure!(self.default_height > 0, "`default_height` must be positive.");
        ensure!(self.max_line_len > 0, "`max_line_len` must be positive.");
        ensure!(
            self.plane_start <= self.plane_end,
            "`plane_start` ({:#X}) is after `plane_end` ({:#X}).",
            self.plane_start,
            self.plane_end,
        );
        Ok(())
    }

    /// Parses a configuration from the contents of a .toml file.
    #[cfg(feature = "config_file")]
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: TranscodeConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a .toml file.
    #[cfg(feature = "config_file")]
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file '{}'", path.display()))?;
        Self::from_toml(&source)
            .with_context(|| format!("Could not parse config file '{}'", path.display()))
    }
}
