//! Per-thread speculation history for in-flight loads.
//!
//! Every load the predictor sees at dispatch is recorded here until it
//! either commits or is squashed. Entries are kept in dispatch order, so
//! squash walks from the tail and commit pops from the head.

use std::collections::VecDeque;

use crate::common::types::{Addr, InstSeqNum, RegVal, ThreadId};

/// A record of one in-flight load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Sequence number assigned at rename.
    pub seq_num: InstSeqNum,
    /// PC of the load.
    pub pc: Addr,
    /// Hardware thread the load belongs to.
    pub tid: ThreadId,
    /// Value offered at dispatch, meaningful only when `predicted` is set.
    pub predicted_value: RegVal,
    /// Whether a prediction was actually offered for this load.
    pub predicted: bool,
}

/// FIFO queue of history entries for one hardware thread.
///
/// Ordered by `seq_num`: the head is the oldest in-flight load, the tail
/// the youngest. The caller guarantees strictly increasing sequence
/// numbers across pushes.
#[derive(Debug, Default)]
pub struct HistoryQueue {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Returns the number of in-flight entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no loads are in flight.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the oldest entry without removing it.
    #[inline]
    pub fn front(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Appends a record for a newly dispatched load.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
    }

    /// Removes and returns the oldest entry.
    pub fn pop_front(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_front()
    }

    /// Finds the entry with this sequence number, if a prediction was
    /// offered for it. Entries that were tracked but never predicted are
    /// skipped; they have nothing to check against.
    pub fn find_predicted(&self, seq_num: InstSeqNum) -> Option<&HistoryEntry> {
        self.entries
            .iter()
            .find(|e| e.seq_num == seq_num && e.predicted)
    }

    /// Drops every entry younger than the rollback point.
    ///
    /// Pops from the tail while the youngest entry's sequence number is
    /// strictly greater than `seq_num`. The entry with the rollback
    /// sequence number itself survives.
    ///
    /// # Returns
    ///
    /// The number of entries dropped.
    pub fn squash_after(&mut self, seq_num: InstSeqNum) -> usize {
        let mut dropped = 0;
        while let Some(back) = self.entries.back() {
            if back.seq_num <= seq_num {
                break;
            }
            let _ = self.entries.pop_back();
            dropped += 1;
        }
        dropped
    }
}
