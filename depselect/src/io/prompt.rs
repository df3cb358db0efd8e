//! Numbered-choice prompt over a pair of text streams.
//!
//! The prompt knows nothing about rules or classes: it renders a ranked list
//! of labels, reads answers one line at a time and returns a validated index.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SelectError};
use crate::model::Label;

const NONE_LINE: &str = "[0] None";
const MALFORMED_MESSAGE: &str = "could not convert input to an integer, retry.";
const OUT_OF_RANGE_MESSAGE: &str = "index out of range, retry.";

/// A validated answer: `0` means "none", `n` means `options[n - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection(usize);

impl Selection {
    pub const NONE: Selection = Selection(0);
    pub const SUGGESTED: Selection = Selection(1);

    pub fn index(self) -> usize {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// The chosen label, or `None` for a skipped prompt.
    pub fn pick(self, options: &[Label]) -> Option<&Label> {
        self.0.checked_sub(1).and_then(|idx| options.get(idx))
    }
}

/// What a prompt returns when a line could be read but not scanned as a
/// single token (blank line, several tokens, undecodable bytes, read error).
///
/// End-of-input is never subject to this policy; it is always fatal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanFailurePolicy {
    /// Treat the answer as `[0] None`.
    #[default]
    Skip,
    /// Treat the answer as `[1]`, the resolver's suggestion.
    AcceptSuggestion,
}

impl ScanFailurePolicy {
    pub fn selection(self) -> Selection {
        match self {
            ScanFailurePolicy::Skip => Selection::NONE,
            ScanFailurePolicy::AcceptSuggestion => Selection::SUGGESTED,
        }
    }

    /// Trailing line of a prompt description, telling the user what Enter does.
    pub fn hint(self) -> &'static str {
        match self {
            ScanFailurePolicy::Skip => "Hit Enter to skip, or a number to choose: ",
            ScanFailurePolicy::AcceptSuggestion => "Hit Enter to accept, or a number to choose: ",
        }
    }
}

#[derive(Debug)]
enum Scan {
    Token(String),
    Exhausted,
    Failed(&'static str),
}

/// Locally recovered input problems; the user is asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejected {
    MalformedToken,
    OutOfRange,
}

impl Rejected {
    fn message(self) -> &'static str {
        match self {
            Rejected::MalformedToken => MALFORMED_MESSAGE,
            Rejected::OutOfRange => OUT_OF_RANGE_MESSAGE,
        }
    }
}

fn parse_index(token: &str, option_count: usize) -> std::result::Result<Selection, Rejected> {
    let idx: i64 = token.parse().map_err(|_| Rejected::MalformedToken)?;
    let idx = usize::try_from(idx).map_err(|_| Rejected::OutOfRange)?;
    if idx > option_count {
        return Err(Rejected::OutOfRange);
    }
    Ok(Selection(idx))
}

/// Interactive prompt bound to an input and an output stream.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    on_scan_failure: ScanFailurePolicy,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            on_scan_failure: ScanFailurePolicy::default(),
        }
    }

    pub fn with_scan_failure_policy(mut self, policy: ScanFailurePolicy) -> Self {
        self.on_scan_failure = policy;
        self
    }

    pub fn scan_failure_policy(&self) -> ScanFailurePolicy {
        self.on_scan_failure
    }

    /// Output stream, for callers that print context around a prompt.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Ask the user to pick one of `options` (ranked best-first).
    ///
    /// A single option is accepted without printing or reading anything.
    /// Otherwise options are listed highest index first so the suggestion
    /// sits right above `[0] None` and the `description`. Unparseable and
    /// out-of-range answers print a retry message and read again.
    ///
    /// # Errors
    /// - [`SelectError::InputExhausted`] if the input ends before a valid answer.
    /// - [`SelectError::NoCandidates`] if `options` is empty.
    /// - [`SelectError::Output`] if writing the prompt fails.
    pub fn ask(&mut self, options: &[Label], description: &str) -> Result<Selection> {
        match options.len() {
            0 => return Err(SelectError::NoCandidates),
            1 => {
                debug!(label = %options[0], "single candidate accepted without prompting");
                return Ok(Selection::SUGGESTED);
            }
            _ => {}
        }

        for (idx, option) in options.iter().enumerate().rev() {
            writeln!(self.output, "[{}] {}", idx + 1, option)?;
        }
        writeln!(self.output, "{NONE_LINE}")?;
        write!(self.output, "{description}")?;
        self.output.flush()?;

        loop {
            let token = match self.scan_token() {
                Scan::Token(token) => token,
                Scan::Exhausted => return Err(SelectError::InputExhausted),
                Scan::Failed(reason) => {
                    let selection = self.on_scan_failure.selection();
                    debug!(
                        reason,
                        policy = ?self.on_scan_failure,
                        selection = selection.index(),
                        "scan failure resolved by policy"
                    );
                    return Ok(selection);
                }
            };
            match parse_index(&token, options.len()) {
                Ok(selection) => return Ok(selection),
                Err(rejected) => {
                    debug!(token = %token, ?rejected, "rejected answer");
                    writeln!(self.output, "{}", rejected.message())?;
                    self.output.flush()?;
                }
            }
        }
    }

    /// Read one line and scan exactly one whitespace-delimited token from it.
    fn scan_token(&mut self) -> Scan {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Scan::Exhausted,
            Ok(_) => {
                let mut tokens = line.split_whitespace();
                match (tokens.next(), tokens.next()) {
                    (Some(token), None) => Scan::Token(token.to_string()),
                    (None, _) => Scan::Failed("blank line"),
                    (Some(_), Some(_)) => Scan::Failed("more than one token"),
                }
            }
            Err(err) => {
                debug!(error = %err, "input read failed");
                Scan::Failed("read error")
            }
        }
    }
}
