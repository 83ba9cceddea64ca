//! Instruction view consumed by the speculation units.
//!
//! The units never see decoded instructions or micro-ops; the host
//! pipeline summarizes each instruction into an `InstView`. This module
//! provides:
//! 1. **Operation classes:** The closed set of categories the units
//!    branch on.
//! 2. **Register handles:** Renamed physical register identifiers that
//!    carry their class and structural readiness.
//! 3. **The view itself:** Sequence number, PC, thread, and operand
//!    shape, with the constant-time flag operand as an explicit field.

use crate::common::types::{Addr, InstSeqNum, ThreadId};

/// Category of an instruction, as the issue logic classifies it.
///
/// The set is closed on purpose: the speculation units only ever branch
/// on a handful of classes, and a tagged enum keeps those branches
/// exhaustive and cheap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpClass {
    /// Integer add, shift, logic, compare.
    IntAlu,
    /// Integer multiply.
    IntMult,
    /// Integer divide or remainder.
    IntDiv,
    /// Load from memory.
    MemRead,
    /// Store to memory.
    MemWrite,
    /// Anything else (branches, floating point, system).
    Other,
}

/// Class of a physical register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegClass {
    /// General-purpose integer register.
    Int,
    /// Floating-point register.
    Float,
    /// Condition-code register.
    CondCode,
    /// Miscellaneous (control/status) register.
    Misc,
}

/// A renamed physical register handle.
///
/// Rename stamps the class and the structural always-ready property onto
/// the handle, so consumers never have to ask the register file about
/// either.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PhysRegId {
    class: RegClass,
    index: u16,
    always_ready: bool,
}

impl PhysRegId {
    /// Creates a handle for an ordinary renamed register.
    pub const fn new(class: RegClass, index: u16) -> Self {
        Self {
            class,
            index,
            always_ready: false,
        }
    }

    /// Creates a handle for a hardwired register (the architectural zero
    /// register and similar). Hardwired registers are always ready and
    /// writes to them are dead.
    pub const fn hardwired(class: RegClass, index: u16) -> Self {
        Self {
            class,
            index,
            always_ready: true,
        }
    }

    /// Returns the register class.
    #[inline]
    pub const fn class(&self) -> RegClass {
        self.class
    }

    /// Returns the flat physical register index.
    #[inline]
    pub const fn index(&self) -> u16 {
        self.index
    }

    /// Returns true if the register is structurally always ready.
    #[inline]
    pub const fn is_always_ready(&self) -> bool {
        self.always_ready
    }

    /// Returns true if this is an integer-class register.
    #[inline]
    pub fn is_int(&self) -> bool {
        self.class == RegClass::Int
    }
}

/// The instruction summary the speculation units consume.
///
/// Built by the host pipeline after rename. Source and destination lists
/// hold renamed handles in operand order. The constant-time flag operand
/// is carried separately in `dit` rather than hidden among the sources:
/// the decoder knows exactly which operand it is, and multiply/divide
/// instructions are required to have one.
#[derive(Clone, Debug)]
pub struct InstView {
    /// Sequence number assigned at rename.
    pub seq_num: InstSeqNum,
    /// Hardware thread the instruction belongs to.
    pub tid: ThreadId,
    /// PC of the instruction.
    pub pc: Addr,
    /// Operation class.
    pub op_class: OpClass,
    /// Renamed destination registers, in operand order.
    pub dests: Vec<PhysRegId>,
    /// Renamed source registers, in operand order. Does not include the
    /// constant-time flag operand.
    pub srcs: Vec<PhysRegId>,
    /// Renamed handle of the data-independent-timing flag operand
    /// (PSTATE.DIT or the architecture's equivalent). Required for
    /// `IntMult` and `IntDiv`; absent for classes that never consult it.
    pub dit: Option<PhysRegId>,
}
