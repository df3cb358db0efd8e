//! Text emphasis used when describing a prompt.
//!
//! Kept behind a trait so the selector can run against plain text in tests
//! and when output is not a terminal.

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Pure text styling: highlight `text` for display.
pub trait Emphasis {
    fn emphasize(&self, text: &str) -> String;
}

/// Bold terminal text. `colored` already honors `NO_COLOR` and `CLICOLOR`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bold;

impl Emphasis for Bold {
    fn emphasize(&self, text: &str) -> String {
        text.bold().to_string()
    }
}

/// No styling at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Emphasis for Plain {
    fn emphasize(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Configurable emphasis style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmphasisStyle {
    #[default]
    Bold,
    Plain,
}

impl EmphasisStyle {
    pub fn emphasis(self) -> Box<dyn Emphasis> {
        match self {
            EmphasisStyle::Bold => Box::new(Bold),
            EmphasisStyle::Plain => Box::new(Plain),
        }
    }
}
