//! Scalar type aliases shared across the speculation units.
//!
//! The host pipeline hands these values across every API seam, so they are
//! plain aliases rather than newtypes: the units never do arithmetic that
//! would benefit from unit-checking, and the aliases keep call sites close
//! to how the surrounding pipeline code reads.

/// A byte address (program counter or data address).
pub type Addr = u64;

/// An architectural register value. Narrower operations use the low bits.
pub type RegVal = u64;

/// Global instruction sequence number, assigned at rename.
///
/// Strictly increasing within a thread; later instructions always carry
/// larger numbers, which is what squash and commit ordering rely on.
pub type InstSeqNum = u64;

/// Hardware thread context index. Always less than
/// `crate::common::constants::MAX_THREADS`.
pub type ThreadId = usize;
