//! Speculation units.
//!
//! This module contains the units the out-of-order pipeline consults to
//! get ahead of long-latency operations: load value prediction and
//! computation simplification.

/// Computation simplifier for trivial multiply/divide forms.
pub mod compsimp;

/// Load value predictor with per-thread speculation history.
pub mod lvp;
