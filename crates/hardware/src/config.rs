//! Configuration system for the speculation units.
//!
//! This module defines the configuration structures used to parameterize
//! the load value predictor and the computation simplifier. It provides:
//! 1. **Defaults:** Baseline table geometry and confidence parameters.
//! 2. **Structures:** Per-unit config sections under one root `Config`.
//! 3. **Loading:** JSON deserialization with validation, from a string
//!    or a file.
//!
//! Both units ship disabled by default; enabling them is an explicit
//! choice in the host configuration. Every field has a default, so a
//! partial (or empty) JSON document is a valid configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the speculation units.
///
/// These values define the baseline behavior when not explicitly
/// overridden in a JSON configuration.
mod defaults {
    /// Number of entries in the load value prediction table.
    ///
    /// Must be a power of two; the table is direct-mapped and indexed by
    /// masking the shifted PC.
    pub const LVP_TABLE_SIZE: usize = 4096;

    /// Confidence a table entry must reach before a value is offered.
    ///
    /// With the default 3-bit counters this is the saturation value: an
    /// entry predicts only after its value has repeated enough times to
    /// pin the counter at its maximum.
    pub const LVP_CONFIDENCE_THRESHOLD: u8 = 7;

    /// Width in bits of each entry's saturating confidence counter.
    pub const LVP_CONFIDENCE_BITS: u8 = 3;
}

/// Root configuration for the speculation units.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use o3sim_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.lvp.enabled);
/// assert_eq!(config.lvp.table_size, 4096);
/// assert_eq!(config.lvp.confidence_threshold, 7);
/// assert!(!config.comp_simp.enabled);
/// ```
///
/// Loading from JSON (any omitted field keeps its default):
///
/// ```
/// use o3sim_core::config::Config;
///
/// let json = r#"{
///     "lvp": {
///         "enabled": true,
///         "table_size": 1024,
///         "confidence_threshold": 3,
///         "confidence_bits": 2
///     },
///     "comp_simp": {
///         "enabled": true
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.lvp.enabled);
/// assert_eq!(config.lvp.table_size, 1024);
/// assert!(config.comp_simp.enabled);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Load value predictor configuration.
    #[serde(default)]
    pub lvp: LvpConfig,
    /// Computation simplifier configuration.
    #[serde(default)]
    pub comp_simp: CompSimpConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lvp: LvpConfig::default(),
            comp_simp: CompSimpConfig::default(),
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON string and validates it.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON document; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not parse or the resulting
    /// configuration fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or
    /// fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_json(&json)
    }

    /// Checks that every parameter can actually be honored.
    ///
    /// # Errors
    ///
    /// Returns an error if the prediction table size is not a power of
    /// two or the confidence counter width is outside `1..=8`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.lvp.table_size.is_power_of_two() {
            return Err(ConfigError::TableSizeNotPowerOfTwo(self.lvp.table_size));
        }
        if !(1..=8).contains(&self.lvp.confidence_bits) {
            return Err(ConfigError::ConfidenceBitsOutOfRange(
                self.lvp.confidence_bits,
            ));
        }
        Ok(())
    }
}

/// Load value predictor configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LvpConfig {
    /// Enable load value prediction. Off by default.
    #[serde(default)]
    pub enabled: bool,

    /// Number of prediction table entries. Must be a power of two.
    #[serde(default = "LvpConfig::default_table_size")]
    pub table_size: usize,

    /// Confidence required before a prediction is offered.
    #[serde(default = "LvpConfig::default_confidence_threshold")]
    pub confidence_threshold: u8,

    /// Width in bits of each entry's confidence counter (1 to 8).
    #[serde(default = "LvpConfig::default_confidence_bits")]
    pub confidence_bits: u8,
}

impl LvpConfig {
    /// Returns the default prediction table size.
    fn default_table_size() -> usize {
        defaults::LVP_TABLE_SIZE
    }

    /// Returns the default confidence threshold.
    fn default_confidence_threshold() -> u8 {
        defaults::LVP_CONFIDENCE_THRESHOLD
    }

    /// Returns the default confidence counter width.
    fn default_confidence_bits() -> u8 {
        defaults::LVP_CONFIDENCE_BITS
    }
}

impl Default for LvpConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            table_size: defaults::LVP_TABLE_SIZE,
            confidence_threshold: defaults::LVP_CONFIDENCE_THRESHOLD,
            confidence_bits: defaults::LVP_CONFIDENCE_BITS,
        }
    }
}

/// Computation simplifier configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CompSimpConfig {
    /// Enable computation simplification. Off by default.
    #[serde(default)]
    pub enabled: bool,
}

impl Default for CompSimpConfig {
    fn default() -> Self {
        Self { enabled: false }
    }
}
