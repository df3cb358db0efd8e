//! Interactive selection of dependencies to add to each rule.

use std::collections::HashSet;
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::core::ordering::{sorted_classes, sorted_rules};
use crate::core::satisfied::already_satisfied;
use crate::error::Result;
use crate::io::prompt::Prompter;
use crate::io::style::Emphasis;
use crate::model::{ClassName, DepsToAdd, Label, MissingDeps, Rule};

/// Ask the user which dependency to add for each missing class.
///
/// Rules are processed one at a time, sorted by label; within a rule, classes
/// are visited by name. A class is never prompted for when a label already
/// chosen for the same rule is among its candidates. Every rule of `missing`
/// gets an entry in the result, empty if nothing was chosen.
///
/// # Errors
/// Fails if the input ends while a prompt is waiting or the output cannot be
/// written. No partial result is returned.
pub fn select_deps_to_add<R: BufRead, W: Write>(
    missing: &MissingDeps,
    prompter: &mut Prompter<R, W>,
    emphasis: &dyn Emphasis,
) -> Result<DepsToAdd> {
    let mut deps_to_add = DepsToAdd::new();
    for (rule, classes) in sorted_rules(missing) {
        let mut added: HashSet<Label> = HashSet::new();
        let mut chosen = Vec::new();

        for (class, candidates) in sorted_classes(classes) {
            if candidates.is_empty() {
                warn!(rule = %rule, class = %class, "no candidates for class, skipping");
                continue;
            }
            if already_satisfied(&added, candidates) {
                debug!(rule = %rule, class = %class, "class satisfied by an earlier choice");
                continue;
            }

            let out = prompter.output();
            writeln!(out)?;
            writeln!(
                out,
                "The BUILD rule {} is missing a dependency. Choose one of the options below:",
                rule.label()
            )?;
            let policy = prompter.scan_failure_policy();
            let description = describe(class, &candidates[0], emphasis, policy.hint());

            let selection = prompter.ask(candidates, &description)?;
            match selection.pick(candidates) {
                Some(label) => {
                    debug!(rule = %rule, class = %class, label = %label, "dependency chosen");
                    added.insert(label.clone());
                    chosen.push(label.clone());
                }
                None => debug!(rule = %rule, class = %class, "no dependency chosen"),
            }
        }

        info!(rule = %rule, added = chosen.len(), "rule processed");
        deps_to_add.insert(rule.clone(), chosen);
    }
    Ok(deps_to_add)
}

fn describe(class: &ClassName, suggestion: &Label, emphasis: &dyn Emphasis, hint: &str) -> String {
    format!(
        "For class:  {}\nSuggestion: {}\n{}",
        emphasis.emphasize(class.as_str()),
        emphasis.emphasize(suggestion.as_str()),
        hint
    )
}

/// Total number of labels chosen across all rules.
pub fn chosen_count(deps: &DepsToAdd) -> usize {
    deps.values().map(Vec::len).sum()
}

/// Rules that ended up with at least one label to add.
pub fn rules_with_additions(deps: &DepsToAdd) -> impl Iterator<Item = (&Rule, &[Label])> {
    deps.iter()
        .filter(|(_, labels)| !labels.is_empty())
        .map(|(rule, labels)| (rule, labels.as_slice()))
}
