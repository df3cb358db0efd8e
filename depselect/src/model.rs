//! Handles borrowed from the build-graph model.
//!
//! The selector never creates or mutates these; it only compares, orders and
//! displays them. All three identifiers serialize as plain JSON strings.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A dependency target that can be added to a rule (e.g. `//java/com/foo:bar`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A fully qualified Java class name that a rule references without a
/// reachable dependency.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A BUILD rule, identified by its own label.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rule {
    label: Label,
}

impl Rule {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Label::new(label),
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label.fmt(f)
    }
}

/// Candidate labels per missing class, ranked best-first by the resolver.
pub type ClassCandidates = HashMap<ClassName, Vec<Label>>;

/// Resolver output: every rule with at least one unresolved class.
///
/// Iteration order is unspecified; see [`crate::core::ordering`].
pub type MissingDeps = HashMap<Rule, ClassCandidates>;

/// Labels chosen per rule, in the order the user confirmed them.
///
/// Every processed rule has an entry, possibly empty.
pub type DepsToAdd = BTreeMap<Rule, Vec<Label>>;
