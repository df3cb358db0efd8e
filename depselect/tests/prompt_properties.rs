//! Property-based tests for the prompt and the selection coordinator.
//!
//! These tests verify, for arbitrary candidate lists:
//! - Single candidates are accepted without reading or printing
//! - Unparseable and out-of-range answers are retried exactly once per answer
//! - A choice for one rule never suppresses prompts for another rule

use std::collections::HashSet;

use proptest::prelude::*;

use depselect::error::SelectError;
use depselect::io::prompt::Selection;
use depselect::io::style::Plain;
use depselect::model::{Label, Rule};
use depselect::select::select_deps_to_add;
use depselect::test_support::{MissingDepsBuilder, ScriptedPrompter, scripted_prompter};

const MALFORMED_MESSAGE: &str = "could not convert input to an integer, retry.";
const OUT_OF_RANGE_MESSAGE: &str = "index out of range, retry.";

/// Strategy for distinct, label-shaped candidate lists of the given length.
fn candidates_strategy(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Label>> {
    prop::collection::hash_set("[a-z]{1,8}", len).prop_map(|names| {
        names
            .into_iter()
            .map(|name| Label::new(format!("//{name}:{name}")))
            .collect()
    })
}

fn transcript(prompter: ScriptedPrompter) -> String {
    let (_, output) = prompter.into_parts();
    String::from_utf8(output).expect("utf8 output")
}

proptest! {
    /// One candidate: selection 1, nothing printed, input untouched.
    #[test]
    fn single_candidate_needs_no_interaction(options in candidates_strategy(1..2), answer in "[0-9]{1,3}") {
        let mut prompter = scripted_prompter(&format!("{answer}\n"));
        let selection = prompter.ask(&options, "pick: ").expect("ask");
        prop_assert_eq!(selection, Selection::SUGGESTED);
        prop_assert!(transcript(prompter).is_empty());
    }

    /// "x" then "0": one malformed-token retry, then none.
    #[test]
    fn malformed_then_zero_selects_none(options in candidates_strategy(2..10)) {
        let mut prompter = scripted_prompter("x\n0\n");
        let selection = prompter.ask(&options, "pick: ").expect("ask");
        prop_assert!(selection.is_none());
        prop_assert_eq!(transcript(prompter).matches(MALFORMED_MESSAGE).count(), 1);
    }

    /// "N+1" then "1": one out-of-range retry, then the suggestion.
    #[test]
    fn above_range_then_one_selects_suggestion(options in candidates_strategy(2..10)) {
        let script = format!("{}\n1\n", options.len() + 1);
        let mut prompter = scripted_prompter(&script);
        let selection = prompter.ask(&options, "pick: ").expect("ask");
        prop_assert_eq!(selection, Selection::SUGGESTED);
        prop_assert_eq!(transcript(prompter).matches(OUT_OF_RANGE_MESSAGE).count(), 1);
    }

    /// Negative answers are rejected like answers above the range.
    #[test]
    fn negative_answer_is_out_of_range(options in candidates_strategy(2..10), below in 1i64..1000) {
        let script = format!("-{below}\n1\n");
        let mut prompter = scripted_prompter(&script);
        let selection = prompter.ask(&options, "pick: ").expect("ask");
        prop_assert_eq!(selection, Selection::SUGGESTED);
        prop_assert_eq!(transcript(prompter).matches(OUT_OF_RANGE_MESSAGE).count(), 1);
    }

    /// Every in-range answer picks exactly that option, listed N..1 then None.
    #[test]
    fn in_range_answer_picks_that_option(options in candidates_strategy(2..10), pick in 0usize..10) {
        let pick = pick % (options.len() + 1);
        let mut prompter = scripted_prompter(&format!("{pick}\n"));
        let selection = prompter.ask(&options, "pick: ").expect("ask");
        prop_assert_eq!(selection.index(), pick);
        prop_assert_eq!(selection.pick(&options), pick.checked_sub(1).map(|idx| &options[idx]));

        let out = transcript(prompter);
        let listed: Vec<&str> = out.lines().take(options.len()).collect();
        let expected: Vec<String> = options
            .iter()
            .enumerate()
            .rev()
            .map(|(idx, label)| format!("[{}] {}", idx + 1, label))
            .collect();
        prop_assert_eq!(listed, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// Exhausted input with nothing read is always fatal.
    #[test]
    fn empty_input_is_exhausted(options in candidates_strategy(2..10)) {
        let mut prompter = scripted_prompter("");
        let err = prompter.ask(&options, "pick: ").expect_err("exhausted");
        prop_assert!(matches!(err, SelectError::InputExhausted));
    }

    /// Identical candidates on two rules: both rules are prompted independently.
    #[test]
    fn choices_do_not_leak_across_rules(options in candidates_strategy(2..6), first in 1usize..6, second in 1usize..6) {
        let first = (first - 1) % options.len() + 1;
        let second = (second - 1) % options.len() + 1;
        let names: Vec<&str> = options.iter().map(Label::as_str).collect();
        let missing = MissingDepsBuilder::new()
            .class("//r1:r1", "com.A", &names)
            .class("//r2:r2", "com.A", &names)
            .build();

        let mut prompter = scripted_prompter(&format!("{first}\n{second}\n"));
        let deps = select_deps_to_add(&missing, &mut prompter, &Plain).expect("select");
        prop_assert_eq!(deps.get(&Rule::new("//r1:r1")), Some(&vec![options[first - 1].clone()]));
        prop_assert_eq!(deps.get(&Rule::new("//r2:r2")), Some(&vec![options[second - 1].clone()]));
    }

    /// No rule ever receives the same label twice.
    #[test]
    fn results_never_repeat_a_label(options in candidates_strategy(2..6), answers in prop::collection::vec(0usize..6, 4)) {
        let names: Vec<&str> = options.iter().map(Label::as_str).collect();
        let missing = MissingDepsBuilder::new()
            .class("//x:x", "com.A", &names)
            .class("//x:x", "com.B", &names[1..])
            .class("//x:x", "com.C", &names[..1])
            .class("//x:x", "com.D", &names)
            .build();
        // com.B has one candidate fewer, so an answer may be retried; trailing
        // zeros keep a retried prompt from running out of input.
        let mut script: String = answers
            .iter()
            .map(|answer| format!("{}\n", answer % (options.len() + 1)))
            .collect();
        script.push_str(&"0\n".repeat(8));

        let mut prompter = scripted_prompter(&script);
        let deps = select_deps_to_add(&missing, &mut prompter, &Plain).expect("select");
        let chosen = deps.get(&Rule::new("//x:x")).expect("rule present");
        let unique: HashSet<&Label> = chosen.iter().collect();
        prop_assert_eq!(unique.len(), chosen.len());
    }
}

/// Smallest input where the answer for com.A leaves com.B to retry an
/// answer above its shorter candidate list.
#[test]
fn shorter_candidate_list_retries_without_exhausting_input() {
    let missing = MissingDepsBuilder::new()
        .class("//x:x", "com.A", &["//c:c", "//a:a", "//b:b"])
        .class("//x:x", "com.B", &["//a:a", "//b:b"])
        .class("//x:x", "com.C", &["//c:c"])
        .class("//x:x", "com.D", &["//c:c", "//a:a", "//b:b"])
        .build();

    let mut prompter = scripted_prompter("0\n3\n3\n3\n0\n0\n");
    let deps = select_deps_to_add(&missing, &mut prompter, &Plain).expect("select");
    assert_eq!(
        deps.get(&Rule::new("//x:x")),
        Some(&vec![Label::new("//c:c")])
    );
    assert_eq!(transcript(prompter).matches(OUT_OF_RANGE_MESSAGE).count(), 3);
}
