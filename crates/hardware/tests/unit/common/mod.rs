//! Unit tests for shared infrastructure types.
