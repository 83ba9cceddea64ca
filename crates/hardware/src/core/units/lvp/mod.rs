//! Load Value Predictor (LVP).
//!
//! Predicts the value a load will return before memory responds, letting
//! dependent instructions issue speculatively. The unit provides:
//! 1. **Prediction:** Last-value lookup keyed by load PC, gated by a
//!    per-entry saturating confidence counter.
//! 2. **History:** Per-thread FIFO records of every in-flight load, used
//!    to validate predictions and to unwind on pipeline squashes.
//! 3. **Validation:** Writeback-time comparison of the predicted against
//!    the actual value, with a fail-open policy for unknown loads.
//! 4. **Training:** Commit-time updates that build or decay confidence.
//!
//! The prediction table is shared by all hardware threads while the
//! history queues are strictly per-thread. Sharing the table is a
//! capacity trade-off: two threads hitting the same load PC train a
//! single entry, and cross-thread aliasing is accepted behavior.

pub mod history;
pub mod table;

use tracing::{debug, trace, warn};

use crate::common::constants::MAX_THREADS;
use crate::common::types::{Addr, InstSeqNum, RegVal, ThreadId};
use crate::config::LvpConfig;
use crate::stats::LvpStats;

pub use self::history::HistoryEntry;
use self::history::HistoryQueue;
use self::table::PredictionTable;

/// The load value prediction unit.
///
/// The host pipeline drives it at four points: `predict` plus
/// `add_history` at dispatch, `validate` at writeback, `squash` on
/// recovery, and `commit_entry` plus `update` at retirement.
#[derive(Debug)]
pub struct LoadValuePredictor {
    /// Whether prediction is enabled. Only `predict` consults this: a
    /// disabled unit declines every lookup without counting, while the
    /// history and training paths stay live for hosts that drive them.
    enabled: bool,
    /// Shared last-value table.
    table: PredictionTable,
    /// One history queue per hardware thread context.
    history: Vec<HistoryQueue>,
    /// Prediction and validation counters.
    pub stats: LvpStats,
}

impl LoadValuePredictor {
    /// Creates a predictor from its configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Table geometry, confidence parameters, and the
    ///   enable flag.
    ///
    /// # Panics
    ///
    /// Panics if the table size is not a power of two or the confidence
    /// width is outside `1..=8`.
    pub fn new(config: &LvpConfig) -> Self {
        let counter_max = ((1u16 << config.confidence_bits) - 1) as u8;
        if config.confidence_threshold > counter_max {
            warn!(
                "lvp: confidence threshold {} exceeds {}-bit counter maximum {}; \
                 the predictor will train but never offer a prediction",
                config.confidence_threshold, config.confidence_bits, counter_max
            );
        }
        Self {
            enabled: config.enabled,
            table: PredictionTable::new(
                config.table_size,
                config.confidence_bits,
                config.confidence_threshold,
            ),
            history: (0..MAX_THREADS).map(|_| HistoryQueue::new()).collect(),
            stats: LvpStats::default(),
        }
    }

    /// Returns whether prediction is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the number of in-flight loads tracked for a thread.
    ///
    /// # Panics
    ///
    /// Panics if `tid` is not below `MAX_THREADS`.
    #[inline]
    pub fn history_len(&self, tid: ThreadId) -> usize {
        self.history[tid].len()
    }

    /// Looks up a value prediction for a load at dispatch.
    ///
    /// Returns a value only when the predictor is enabled and the table
    /// holds a confident, tag-matching entry for `pc`. The table is not
    /// modified. While disabled, no statistics are touched either.
    ///
    /// # Arguments
    ///
    /// * `pc` - PC of the load being dispatched.
    /// * `tid` - Dispatching thread. Does not influence the lookup (the
    ///   table is shared); carried for tracing.
    pub fn predict(&mut self, pc: Addr, tid: ThreadId) -> Option<RegVal> {
        if !self.enabled {
            return None;
        }
        match self.table.predict(pc) {
            Some(value) => {
                self.stats.predictions += 1;
                trace!("lvp: tid={tid} pc={pc:#x} predicted value {value:#x}");
                Some(value)
            }
            None => {
                self.stats.not_confident += 1;
                None
            }
        }
    }

    /// Records a dispatched load in its thread's history queue.
    ///
    /// Must be called once per dispatched load, in per-thread program
    /// order: sequence numbers within a thread are strictly increasing.
    /// Loads for which no prediction was offered are recorded with
    /// `predicted == false` so retirement bookkeeping stays aligned.
    ///
    /// # Panics
    ///
    /// Panics if `entry.tid` is not below `MAX_THREADS`.
    pub fn add_history(&mut self, entry: HistoryEntry) {
        trace!(
            "lvp: tid={} [sn:{}] pc={:#x} tracked (predicted={})",
            entry.tid, entry.seq_num, entry.pc, entry.predicted
        );
        self.history[entry.tid].push(entry);
    }

    /// Checks a prediction against the value the load actually returned.
    ///
    /// Scans every thread's history for a predicted entry with this
    /// sequence number. A match with the same value counts as correct; a
    /// mismatch counts as incorrect and as a squash trigger. If no
    /// predicted entry exists (the load was never predicted, or its
    /// history was already squashed) the answer is `true`: a stale
    /// validation callback must never start a spurious recovery.
    ///
    /// The history entry is left in place; retirement removes it.
    ///
    /// # Arguments
    ///
    /// * `seq_num` - Sequence number of the load being written back.
    /// * `actual` - The value memory returned.
    pub fn validate(&mut self, seq_num: InstSeqNum, actual: RegVal) -> bool {
        for queue in &self.history {
            if let Some(entry) = queue.find_predicted(seq_num) {
                let correct = entry.predicted_value == actual;
                if correct {
                    self.stats.correct += 1;
                    trace!("lvp: [sn:{seq_num}] prediction {actual:#x} confirmed");
                } else {
                    self.stats.incorrect += 1;
                    self.stats.squashes += 1;
                    debug!(
                        "lvp: [sn:{}] mispredicted {:#x}, actual {:#x}",
                        seq_num, entry.predicted_value, actual
                    );
                }
                return correct;
            }
        }
        true
    }

    /// Discards history younger than a rollback point.
    ///
    /// Drops every entry of thread `tid` whose sequence number is
    /// strictly greater than `squashed_seq`. The instruction at the
    /// rollback point itself survives.
    ///
    /// # Panics
    ///
    /// Panics if `tid` is not below `MAX_THREADS`.
    pub fn squash(&mut self, squashed_seq: InstSeqNum, tid: ThreadId) {
        let dropped = self.history[tid].squash_after(squashed_seq);
        if dropped > 0 {
            trace!("lvp: tid={tid} squashed {dropped} entries younger than [sn:{squashed_seq}]");
        }
    }

    /// Retires the oldest tracked load of a thread.
    ///
    /// Removes the head of thread `tid`'s queue if it carries exactly
    /// this sequence number. Any other relationship is left alone: a
    /// mismatching head is logged as an ordering anomaly, since callers
    /// retire loads in program order, exactly once each.
    ///
    /// # Panics
    ///
    /// Panics if `tid` is not below `MAX_THREADS`.
    pub fn commit_entry(&mut self, seq_num: InstSeqNum, tid: ThreadId) {
        let queue = &mut self.history[tid];
        if queue.front().is_some_and(|head| head.seq_num == seq_num) {
            if let Some(entry) = queue.pop_front() {
                trace!(
                    "lvp: tid={} [sn:{}] pc={:#x} retired",
                    tid, entry.seq_num, entry.pc
                );
            }
        } else if let Some(head) = queue.front() {
            warn!(
                "lvp: tid={} history head [sn:{}] does not match committing [sn:{}]",
                tid, head.seq_num, seq_num
            );
        }
    }

    /// Trains the table with the value a load actually returned.
    ///
    /// Called at retirement for every load, whether or not it was
    /// predicted; repeated values build the confidence that future
    /// predictions rely on.
    pub fn update(&mut self, pc: Addr, value: RegVal) {
        self.table.train(pc, value);
    }
}
