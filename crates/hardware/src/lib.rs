//! Speculation core for a cycle-level out-of-order CPU simulator.
//!
//! This crate implements the value-speculation units of an out-of-order
//! core, driven by a host pipeline it does not own:
//! 1. **Load value prediction:** Last-value prediction keyed by load PC
//!    with saturating confidence, per-thread speculation history, and
//!    writeback validation with fail-open semantics.
//! 2. **Computation simplification:** Direct results for trivial integer
//!    multiply/divide forms, gated by the data-independent-timing flag
//!    so constant-time software keeps constant-time execution.
//! 3. **Ambient pieces:** JSON configuration, per-unit statistics with
//!    derived ratios, and trace logging at every speculation decision.
//!
//! The host drives the units at dispatch (`predict`, `add_history`,
//! `try_simplify`), writeback (`validate`), recovery (`squash`), and
//! retirement (`commit_entry`, `update`).

/// Common types, constants, counters, and errors.
pub mod common;
/// Unit configuration (defaults, structures, JSON loading).
pub mod config;
/// Instruction view, register seam, and the speculation units.
pub mod core;
/// Statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Computation simplification unit.
pub use crate::core::units::compsimp::CompSimplifier;
/// Load value prediction unit.
pub use crate::core::units::lvp::LoadValuePredictor;
