//! Core-facing types and speculation units.
//!
//! This module contains everything the host pipeline touches directly:
//! the instruction view it builds after rename, the register file seam
//! the units read operands through, and the speculation units themselves.

/// Instruction view, operation classes, and register handles.
pub mod inst;

/// Read-only register file access seam.
pub mod regfile;

/// Speculation units (load value predictor, computation simplifier).
pub mod units;
