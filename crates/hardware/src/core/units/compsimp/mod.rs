//! Computation Simplifier (CompSimp).
//!
//! Spots integer multiply/divide instructions whose operand values make
//! the result trivially known and supplies that result directly, so the
//! instruction never occupies a multiply/divide functional unit:
//! 1. **Multiply:** `x * 0 = 0`, `1 * x = x`, `x * 1 = x`.
//! 2. **Divide:** `0 / x = 0` (for non-zero `x`), `x / 1 = x`.
//! 3. **Security gate:** when the software has requested data-independent
//!    timing (the DIT flag reads non-zero), simplification is suppressed
//!    entirely, since skipping the functional unit would make latency a
//!    function of operand values.
//!
//! Divide by zero is never simplified; the real unit must produce the
//! architected result. The unit is stateless apart from its counters.

use tracing::{debug, trace};

use crate::common::types::RegVal;
use crate::config::CompSimpConfig;
use crate::core::inst::{InstView, OpClass, RegClass};
use crate::core::regfile::RegFileAccess;
use crate::stats::CompSimpStats;

/// The computation simplification unit.
#[derive(Debug)]
pub struct CompSimplifier {
    /// Whether simplification is enabled.
    enabled: bool,
    /// Eligibility and outcome counters.
    pub stats: CompSimpStats,
}

impl CompSimplifier {
    /// Creates a simplifier from its configuration.
    pub fn new(config: &CompSimpConfig) -> Self {
        Self {
            enabled: config.enabled,
            stats: CompSimpStats::default(),
        }
    }

    /// Returns whether simplification is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Attempts to supply the result of an instruction without executing it.
    ///
    /// Filters run in a fixed order and the first one that fails declines
    /// the instruction: enabled, operation class, the constant-time gate,
    /// destination shape, source shape, and finally operand triviality.
    /// A declined instruction simply executes normally; only the
    /// constant-time gate and the triviality check touch statistics.
    ///
    /// # Arguments
    ///
    /// * `inst` - The instruction view built at rename.
    /// * `regs` - Register file to read the flag and operand values from.
    ///
    /// # Returns
    ///
    /// The simplified result value, or `None` if the instruction must
    /// execute on a functional unit.
    ///
    /// # Panics
    ///
    /// Panics if a multiply/divide instruction arrives without its
    /// constant-time flag operand. The decoder stamps the flag on every
    /// instruction of these classes; its absence means the instruction
    /// view was built wrong, and silently skipping the gate here would
    /// turn a builder bug into a timing side channel.
    pub fn try_simplify(&mut self, inst: &InstView, regs: &dyn RegFileAccess) -> Option<RegVal> {
        if !self.enabled {
            return None;
        }

        if inst.op_class != OpClass::IntMult && inst.op_class != OpClass::IntDiv {
            return None;
        }

        // Constant-time gate. Checked before any shape filtering so that
        // suppression is counted for every multiply/divide the software
        // marked, not just the shapes we could have simplified.
        let Some(dit_reg) = inst.dit else {
            panic!(
                "compsimp: integer multiply/divide [sn:{}] pc {:#x} has no \
                 constant-time flag operand",
                inst.seq_num, inst.pc
            );
        };
        if regs.read_reg(dit_reg, inst.tid) != 0 {
            self.stats.dit_suppressed += 1;
            debug!(
                "compsimp: [sn:{}] pc={:#x} constant-time mode, simplification suppressed",
                inst.seq_num, inst.pc
            );
            return None;
        }

        // The first destination must be an ordinary integer register.
        // Hardwired destinations make the write dead, so there is nothing
        // worth bypassing a functional unit for.
        let dest = inst.dests.first()?;
        if dest.class() != RegClass::Int || dest.is_always_ready() {
            return None;
        }

        // Only plain two-operand forms qualify. Counting integer-class
        // sources filters out condition-code and status operands, and
        // rejects three-source forms such as multiply-add.
        let mut int_srcs = inst.srcs.iter().filter(|r| r.is_int());
        let (Some(&lhs_reg), Some(&rhs_reg), None) =
            (int_srcs.next(), int_srcs.next(), int_srcs.next())
        else {
            return None;
        };

        self.stats.candidates += 1;

        let lhs = regs.read_reg(lhs_reg, inst.tid);
        let rhs = regs.read_reg(rhs_reg, inst.tid);

        let result = match inst.op_class {
            OpClass::IntMult => self.simplify_mult(lhs, rhs),
            OpClass::IntDiv => self.simplify_div(lhs, rhs),
            _ => None,
        };

        if let Some(value) = result {
            self.stats.simplified += 1;
            trace!(
                "compsimp: [sn:{}] pc={:#x} {:#x} op {:#x} simplified to {:#x}",
                inst.seq_num, inst.pc, lhs, rhs, value
            );
        }
        result
    }

    /// Trivial multiply cases.
    fn simplify_mult(&mut self, lhs: RegVal, rhs: RegVal) -> Option<RegVal> {
        if lhs == 0 || rhs == 0 {
            self.stats.mult_by_zero += 1;
            return Some(0);
        }
        if lhs == 1 {
            self.stats.mult_by_one += 1;
            return Some(rhs);
        }
        if rhs == 1 {
            self.stats.mult_by_one += 1;
            return Some(lhs);
        }
        None
    }

    /// Trivial divide cases. `lhs / rhs`; divide by zero never qualifies.
    fn simplify_div(&mut self, lhs: RegVal, rhs: RegVal) -> Option<RegVal> {
        if lhs == 0 && rhs != 0 {
            self.stats.div_of_zero += 1;
            return Some(0);
        }
        if rhs == 1 {
            self.stats.div_by_one += 1;
            return Some(lhs);
        }
        None
    }
}
