//! Errors surfaced by the prompt engine and the selection coordinator.
//!
//! Recoverable input problems (unparseable or out-of-range numbers) never
//! reach this type; the prompt re-asks instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectError {
    /// The input stream ended while a prompt was waiting for an answer.
    #[error("error reading input: end of input reached while waiting for a selection")]
    InputExhausted,

    /// The prompt engine was handed an empty candidate list.
    #[error("no candidates to choose from")]
    NoCandidates,

    /// Writing the prompt transcript failed.
    #[error("error writing prompt output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SelectError>;
