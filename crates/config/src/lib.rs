//! # Config - per-file metadata for the SPC writer
//!
//! [`SpcConfig`] carries every header parameter a caller may choose. Anything
//! derived from the data itself (point counts, first/last X, offsets) is not
//! configurable.
//!
//! Codes are raw integers; see `spcfile::codes` for their meaning.
//!
//! ## TOML
//!
//! Every key is optional:
//!
//! ```toml
//! flags = 132           # MULTI | X_VALUES
//! technique = 11        # Raman
//! x_units = 13
//! y_units = 4
//! resolution = "4 cm-1"
//! memo = "calibration run"
//! axis_labels = ["Shift", "Counts", "Time"]
//! z_increment = 1.0
//!
//! [timestamp]
//! year = 2024
//! month = 3
//! day = 15
//! hour = 9
//! minute = 30
//! ```

use anyhow::{Context, Result};
use fields::DateStamp;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Header metadata and log payload for one SPC file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpcConfig {
    /// File-type flag byte (`ftflgs`).
    pub flags: u8,
    /// Instrument technique code.
    pub technique: u8,
    pub x_units: u8,
    pub y_units: u8,
    pub z_units: u8,
    pub w_units: u8,
    /// Acquisition time; `None` writes the "no timestamp" sentinel.
    pub timestamp: Option<DateStamp>,
    pub resolution: String,
    pub source_instrument: String,
    pub memo: String,
    /// X, Y and Z labels, used by readers when the axis-label flag is set.
    pub axis_labels: Vec<String>,
    pub method_file: String,
    /// Interferogram peak point.
    pub peak_point: u16,
    /// Modification flag bits (`fmods`).
    pub modifications: i32,
    pub z_increment: f32,
    pub w_planes: i32,
    pub w_increment: f32,
    /// Binary part of the log block.
    pub log_data: Vec<u8>,
    /// Text part of the log block.
    pub log_text: String,
}

impl Default for SpcConfig {
    fn default() -> Self {
        Self {
            flags: 0,
            technique: 0,
            x_units: 0,
            y_units: 0,
            z_units: 0,
            w_units: 0,
            timestamp: None,
            resolution: String::new(),
            source_instrument: String::new(),
            memo: String::new(),
            axis_labels: Vec::new(),
            method_file: String::new(),
            peak_point: 0,
            modifications: 0,
            z_increment: 1.0,
            w_planes: 0,
            w_increment: 1.0,
            log_data: Vec::new(),
            log_text: String::new(),
        }
    }
}

impl SpcConfig {
    /// Config with the given flag byte and defaults for everything else.
    #[must_use]
    pub fn with_flags(flags: u8) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }

    /// Parses a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("invalid SPC config")
    }

    /// Reads and parses a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Returns `true` if a log block will be appended.
    #[must_use]
    pub fn has_log(&self) -> bool {
        !self.log_data.is_empty() || !self.log_text.is_empty()
    }
}
