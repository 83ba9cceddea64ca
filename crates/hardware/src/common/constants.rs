//! Global constants for the speculation units.

/// Maximum number of hardware thread contexts the core supports.
///
/// Per-thread structures (load value prediction history queues) are sized
/// to this at construction. Thread ids at or above this value are invalid.
pub const MAX_THREADS: usize = 8;

/// Shift applied to a program counter before indexing prediction tables.
///
/// Instructions are 4-byte aligned, so the low two PC bits carry no
/// information and would waste table index space.
pub const PC_INDEX_SHIFT: u64 = 2;
