//! Interactive selection of missing BUILD dependencies.
//!
//! Given, for each rule, the Java classes it cannot resolve and a ranked list
//! of candidate labels per class, the selector asks the user to pick at most
//! one label per class and records which labels to add to which rule. A label
//! already picked for a rule silences every later prompt it would satisfy.
//!
//! - **[`core`]**: Pure, deterministic logic (ordering, satisfaction checks,
//!   input invariants). No I/O.
//! - **[`io`]**: Prompting over text streams, styling, config and JSON files.
//!
//! [`select`] coordinates both to implement the `depselect select` command.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod model;
pub mod select;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
