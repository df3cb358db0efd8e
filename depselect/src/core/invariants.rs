//! Semantic invariants of resolver output not expressible via JSON Schema.

use std::collections::HashSet;

use crate::core::ordering::{sorted_classes, sorted_rules};
use crate::model::MissingDeps;

/// Check semantic invariants not expressible in JSON Schema:
/// - Every candidate list is non-empty
/// - No label appears twice in one candidate list
/// - No empty rule labels, class names or candidate labels
///
/// Errors are reported in rule/class order so output is stable.
pub fn validate_missing_deps(missing: &MissingDeps) -> Vec<String> {
    let mut errors = Vec::new();
    for (rule, classes) in sorted_rules(missing) {
        if rule.label().as_str().trim().is_empty() {
            errors.push("rule label must not be empty".to_string());
        }
        for (class, candidates) in sorted_classes(classes) {
            let path = format!("{}/{}", rule, class);
            if class.as_str().trim().is_empty() {
                errors.push(format!("{}: class name must not be empty", rule));
            }
            if candidates.is_empty() {
                errors.push(format!("{}: candidate list must not be empty", path));
            }
            let mut seen = HashSet::new();
            for label in candidates {
                if label.as_str().trim().is_empty() {
                    errors.push(format!("{}: candidate label must not be empty", path));
                }
                if !seen.insert(label) {
                    errors.push(format!("{}: duplicate candidate '{}'", path, label));
                }
            }
        }
    }
    errors
}
