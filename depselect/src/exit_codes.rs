//! Stable exit codes for depselect CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Input file, config or output path was invalid, or another error occurred.
pub const INVALID: i32 = 1;
/// Standard input ended while a prompt was waiting for an answer.
pub const INPUT_EXHAUSTED: i32 = 2;
