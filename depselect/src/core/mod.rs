//! Deterministic, pure logic shared by the selector.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! resolver output and return deterministic results suitable for tests.

pub mod invariants;
pub mod ordering;
pub mod satisfied;
