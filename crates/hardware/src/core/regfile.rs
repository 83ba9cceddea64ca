//! Register file access seam.
//!
//! The speculation units read operand values at issue time but never own
//! register state. The host pipeline implements this trait over its
//! physical register file; tests implement it over fixtures and mocks.

use crate::common::types::{RegVal, ThreadId};
use crate::core::inst::PhysRegId;

/// Read-only access to resolved physical register values.
pub trait RegFileAccess {
    /// Reads the current value of a renamed physical register.
    ///
    /// # Arguments
    ///
    /// * `reg` - The renamed handle to read.
    /// * `tid` - The thread context the read is performed for.
    fn read_reg(&self, reg: PhysRegId, tid: ThreadId) -> RegVal;
}
