//! Stable visitation order over the resolver's unordered maps.
//!
//! Rules are visited by label text and classes by name. Candidate lists keep
//! the resolver's ranking; only the outer keys are sorted.

use crate::model::{ClassCandidates, ClassName, Label, MissingDeps, Rule};

/// Rules with their classes, sorted by rule label.
pub fn sorted_rules(missing: &MissingDeps) -> Vec<(&Rule, &ClassCandidates)> {
    let mut rules: Vec<_> = missing.iter().collect();
    rules.sort_by(|a, b| a.0.label().cmp(b.0.label()));
    rules
}

/// Classes of one rule with their ranked candidates, sorted by class name.
pub fn sorted_classes(classes: &ClassCandidates) -> Vec<(&ClassName, &[Label])> {
    let mut sorted: Vec<_> = classes
        .iter()
        .map(|(class, candidates)| (class, candidates.as_slice()))
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    sorted
}
