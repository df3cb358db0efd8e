//! I/O helpers for selector commands.

pub mod config;
pub mod missing_store;
pub mod prompt;
pub mod style;
