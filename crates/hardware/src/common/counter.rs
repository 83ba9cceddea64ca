//! Saturating confidence counter.
//!
//! Prediction structures grade their trust in an entry with a small
//! unsigned counter that sticks at its bounds instead of wrapping. The
//! width is explicit so tables can be configured from one to eight bits
//! per entry without changing the storage type.

/// An n-bit saturating counter.
///
/// The counter holds values in `0..=2^bits - 1`. Increments at the maximum
/// and decrements at zero are no-ops. Consumers compare `value()` against
/// a confidence threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SatCounter {
    /// Current count, always within `0..=max`.
    count: u8,
    /// Saturation bound, `2^bits - 1`.
    max: u8,
}

impl SatCounter {
    /// Creates a counter of the given bit width, starting at zero.
    ///
    /// # Arguments
    ///
    /// * `bits` - Counter width in bits. Must be between 1 and 8.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is outside `1..=8`.
    pub fn new(bits: u8) -> Self {
        Self::with_value(bits, 0)
    }

    /// Creates a counter of the given bit width with an initial count.
    ///
    /// # Arguments
    ///
    /// * `bits` - Counter width in bits. Must be between 1 and 8.
    /// * `initial` - Starting count. Must fit in `bits` bits.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is outside `1..=8` or `initial` exceeds the
    /// saturation bound.
    pub fn with_value(bits: u8, initial: u8) -> Self {
        assert!(
            (1..=8).contains(&bits),
            "saturating counter width must be 1-8 bits, got {bits}"
        );
        let max = (((1u16) << bits) - 1) as u8;
        assert!(
            initial <= max,
            "initial count {initial} exceeds {bits}-bit bound {max}"
        );
        Self {
            count: initial,
            max,
        }
    }

    /// Increments the counter, saturating at the maximum.
    pub fn increment(&mut self) {
        if self.count < self.max {
            self.count += 1;
        }
    }

    /// Decrements the counter, saturating at zero.
    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    /// Resets the counter to zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Returns the current count.
    #[inline]
    pub fn value(&self) -> u8 {
        self.count
    }

    /// Returns true if the counter sits at its saturation bound.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.count == self.max
    }
}
