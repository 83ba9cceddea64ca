//! Configuration error definitions.
//!
//! Embedders that load configuration from user-supplied files get a
//! typed error back instead and can report it before any unit is
//! constructed. The unit constructors themselves treat bad parameters as
//! fatal, so everything here is detectable ahead of time via
//! `Config::validate`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors arising from loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file '{0}': {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// The configuration JSON could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The prediction table size does not support direct-mapped indexing.
    #[error("prediction table size must be a power of two, got {0}")]
    TableSizeNotPowerOfTwo(usize),

    /// The confidence counter width cannot be represented.
    #[error("confidence counter width must be between 1 and 8 bits, got {0}")]
    ConfidenceBitsOutOfRange(u8),
}
