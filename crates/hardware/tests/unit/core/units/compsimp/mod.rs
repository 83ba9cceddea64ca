//! Computation simplifier tests.
