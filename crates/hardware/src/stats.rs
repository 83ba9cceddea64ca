//! Speculation statistics collection and reporting.
//!
//! This module tracks effectiveness metrics for the speculation units.
//! It provides:
//! 1. **Load value prediction:** Offered predictions, validation
//!    outcomes, declined lookups, and squash triggers, with derived
//!    accuracy and coverage ratios.
//! 2. **Computation simplification:** Qualifying candidates, outcomes by
//!    trivial-case kind, and suppressions by the constant-time gate.
//!
//! Counters are plain public fields owned by their unit; the host reads
//! or prints them at the end of a run. Derived ratios guard against
//! empty denominators and report zero instead.

/// Load value prediction statistics.
#[derive(Clone, Debug, Default)]
pub struct LvpStats {
    /// Number of confident predictions offered at dispatch.
    pub predictions: u64,
    /// Number of predictions confirmed correct at writeback.
    pub correct: u64,
    /// Number of predictions found incorrect at writeback.
    pub incorrect: u64,
    /// Number of lookups declined (no entry, tag mismatch, or confidence
    /// below threshold).
    pub not_confident: u64,
    /// Number of pipeline squashes triggered by value mispredictions.
    pub squashes: u64,
}

impl LvpStats {
    /// Fraction of offered predictions that were correct.
    ///
    /// Returns `0.0` when no predictions were offered.
    pub fn accuracy(&self) -> f64 {
        if self.predictions == 0 {
            0.0
        } else {
            self.correct as f64 / self.predictions as f64
        }
    }

    /// Fraction of lookups that produced a prediction.
    ///
    /// Returns `0.0` when the predictor was never consulted.
    pub fn coverage(&self) -> f64 {
        let lookups = self.predictions + self.not_confident;
        if lookups == 0 {
            0.0
        } else {
            self.predictions as f64 / lookups as f64
        }
    }

    /// Prints the load value prediction section to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("LOAD VALUE PREDICTION");
        println!("==========================================================");
        println!("lvp.predictions          {}", self.predictions);
        println!("lvp.correct              {}", self.correct);
        println!("lvp.incorrect            {}", self.incorrect);
        println!("lvp.not_confident        {}", self.not_confident);
        println!("lvp.squashes             {}", self.squashes);
        println!("lvp.accuracy             {:.6}", self.accuracy());
        println!("lvp.coverage             {:.6}", self.coverage());
        println!("----------------------------------------------------------");
    }
}

/// Computation simplification statistics.
#[derive(Clone, Debug, Default)]
pub struct CompSimpStats {
    /// Number of qualifying two-operand multiply/divide instructions.
    pub candidates: u64,
    /// Number of instructions whose result was supplied directly.
    pub simplified: u64,
    /// Multiply-by-zero simplifications.
    pub mult_by_zero: u64,
    /// Multiply-by-one simplifications.
    pub mult_by_one: u64,
    /// Zero-divided-by-x simplifications.
    pub div_of_zero: u64,
    /// Divide-by-one simplifications.
    pub div_by_one: u64,
    /// Simplifications suppressed by the constant-time flag.
    pub dit_suppressed: u64,
}

impl CompSimpStats {
    /// Fraction of candidates that were simplified.
    ///
    /// Returns `0.0` when no instruction qualified.
    pub fn coverage(&self) -> f64 {
        if self.candidates == 0 {
            0.0
        } else {
            self.simplified as f64 / self.candidates as f64
        }
    }

    /// Prints the computation simplification section to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("COMPUTATION SIMPLIFICATION");
        println!("==========================================================");
        println!("compsimp.candidates      {}", self.candidates);
        println!("compsimp.simplified      {}", self.simplified);
        println!("compsimp.coverage        {:.6}", self.coverage());
        println!("compsimp.mult_by_zero    {}", self.mult_by_zero);
        println!("compsimp.mult_by_one     {}", self.mult_by_one);
        println!("compsimp.div_of_zero     {}", self.div_of_zero);
        println!("compsimp.div_by_one      {}", self.div_by_one);
        println!("compsimp.dit_suppressed  {}", self.dit_suppressed);
        println!("----------------------------------------------------------");
    }
}
