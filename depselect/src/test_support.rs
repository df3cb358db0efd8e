//! Test-only helpers for building resolver output and scripted prompts.

use std::io::Cursor;

use crate::io::prompt::Prompter;
use crate::model::{ClassName, Label, MissingDeps, Rule};

/// Prompter reading from an in-memory script and recording its transcript.
pub type ScriptedPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

/// Create a prompter whose input is `script` (newline-separated answers).
pub fn scripted_prompter(script: &str) -> ScriptedPrompter {
    Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

/// Convert string literals into labels, preserving order.
pub fn labels(raw: &[&str]) -> Vec<Label> {
    raw.iter().map(|label| Label::new(*label)).collect()
}

/// Deterministic builder for [`MissingDeps`] fixtures.
#[derive(Debug, Default)]
pub struct MissingDepsBuilder {
    missing: MissingDeps,
}

impl MissingDepsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `class` as missing from `rule`, with ranked `candidates`.
    pub fn class(mut self, rule: &str, class: &str, candidates: &[&str]) -> Self {
        self.missing
            .entry(Rule::new(rule))
            .or_default()
            .insert(ClassName::new(class), labels(candidates));
        self
    }

    pub fn build(self) -> MissingDeps {
        self.missing
    }
}
