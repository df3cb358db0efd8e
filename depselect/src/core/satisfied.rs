//! Redundant-prompt suppression for a single rule.

use std::collections::HashSet;

use crate::model::Label;

/// True if any label already chosen for the rule is one of `candidates`.
///
/// Every candidate is checked, not only the suggested one: a dependency picked
/// for an earlier class may be the second or third choice for a later class.
pub fn already_satisfied(added: &HashSet<Label>, candidates: &[Label]) -> bool {
    candidates.iter().any(|label| added.contains(label))
}
