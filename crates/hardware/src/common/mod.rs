//! Common utilities and types used throughout the speculation core.
//!
//! This module provides fundamental building blocks shared across all
//! components. It includes:
//! 1. **Scalar Types:** Aliases for addresses, register values, sequence
//!    numbers, and thread ids.
//! 2. **Constants:** Thread limits and table indexing parameters.
//! 3. **Counters:** The saturating confidence counter value type.
//! 4. **Error Handling:** Configuration error definitions.

/// Global constants.
pub mod constants;

/// Saturating confidence counter.
pub mod counter;

/// Configuration error types.
pub mod error;

/// Scalar type aliases.
pub mod types;

pub use constants::MAX_THREADS;
pub use counter::SatCounter;
pub use error::ConfigError;
pub use types::{Addr, InstSeqNum, RegVal, ThreadId};
