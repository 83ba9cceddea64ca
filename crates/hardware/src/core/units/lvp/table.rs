//! Last-value prediction table.
//!
//! A direct-mapped table of the most recent value returned by each load PC,
//! with a per-entry saturating confidence counter. The table is shared by
//! all hardware threads: entries are not thread-tagged, trading occasional
//! cross-thread aliasing for capacity.

use tracing::trace;

use crate::common::constants::PC_INDEX_SHIFT;
use crate::common::counter::SatCounter;
use crate::common::types::{Addr, RegVal};

/// An entry in the prediction table.
#[derive(Clone, Copy, Debug)]
struct PredictionEntry {
    /// Full PC of the load that owns this entry. Stored whole rather than
    /// truncated, so index aliasing alone can never produce a false hit.
    tag: Addr,
    /// Last value observed for this tag.
    value: RegVal,
    /// Confidence that the value will repeat.
    confidence: SatCounter,
    /// Indicates if this entry has been trained at least once.
    valid: bool,
}

/// Direct-mapped last-value prediction table.
#[derive(Debug)]
pub struct PredictionTable {
    /// The table of entries.
    entries: Vec<PredictionEntry>,
    /// The total number of entries. Always a power of two.
    size: usize,
    /// Confidence a prediction must reach before it is offered.
    threshold: u8,
}

impl PredictionTable {
    /// Creates a new prediction table.
    ///
    /// # Arguments
    ///
    /// * `size` - Number of entries. Must be a power of 2.
    /// * `confidence_bits` - Width of each entry's confidence counter.
    /// * `threshold` - Confidence required before a value is offered.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not a power of two or `confidence_bits` is
    /// outside `1..=8`.
    pub fn new(size: usize, confidence_bits: u8, threshold: u8) -> Self {
        assert!(
            size.is_power_of_two(),
            "prediction table size must be a power of 2, got {size}"
        );
        let empty = PredictionEntry {
            tag: 0,
            value: 0,
            confidence: SatCounter::new(confidence_bits),
            valid: false,
        };
        Self {
            entries: vec![empty; size],
            size,
            threshold,
        }
    }

    /// Returns the number of entries in the table.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Calculates the index for a given program counter.
    ///
    /// Drops the alignment bits and masks against the table size.
    fn index(&self, pc: Addr) -> usize {
        ((pc >> PC_INDEX_SHIFT) as usize) & (self.size - 1)
    }

    /// Looks up a confident value prediction for the given load PC.
    ///
    /// # Arguments
    ///
    /// * `pc` - The program counter of the load.
    ///
    /// # Returns
    ///
    /// The last observed value if the entry is valid, the full tag matches,
    /// and confidence has reached the threshold, otherwise `None`. The
    /// table is never mutated by a lookup.
    pub fn predict(&self, pc: Addr) -> Option<RegVal> {
        let e = self.entries[self.index(pc)];
        if !e.valid || e.tag != pc {
            trace!("lvp table: pc={pc:#x} no matching entry");
            return None;
        }
        if e.confidence.value() < self.threshold {
            trace!(
                "lvp table: pc={:#x} confidence {} below threshold {}",
                pc,
                e.confidence.value(),
                self.threshold
            );
            return None;
        }
        Some(e.value)
    }

    /// Trains the table with the value a load actually returned.
    ///
    /// A matching tag with the same value reinforces confidence; a matching
    /// tag with a different value keeps the tag but restarts confidence at
    /// zero with the new value. Any other PC landing on the index evicts
    /// the previous owner unconditionally.
    ///
    /// # Arguments
    ///
    /// * `pc` - The program counter of the committed load.
    /// * `value` - The value the load returned.
    pub fn train(&mut self, pc: Addr, value: RegVal) {
        let idx = self.index(pc);
        let e = &mut self.entries[idx];

        if e.valid && e.tag == pc {
            if e.value == value {
                e.confidence.increment();
                trace!(
                    "lvp table: pc={:#x} value {:#x} repeated, confidence {}",
                    pc,
                    value,
                    e.confidence.value()
                );
            } else {
                e.value = value;
                e.confidence.reset();
                trace!("lvp table: pc={pc:#x} value changed to {value:#x}, confidence reset");
            }
            return;
        }

        e.tag = pc;
        e.value = value;
        e.confidence.reset();
        e.valid = true;
        trace!("lvp table: pc={pc:#x} installed value {value:#x}");
    }
}
