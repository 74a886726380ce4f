use crate::patterns::{HyphenPolicy, TermMatcher};
use crate::tokenizer::tokenize;

/// Whole-word conjunctions that join actions; "and/or" splits into both
pub const CONJUNCTIONS: &[&str] = &["and", "or"];

/// Literal separator that also joins actions
pub const SEMICOLON: char = ';';

/// Action occurrences needed before a conjunction counts as joining actions
pub const MIN_ACTIONS: usize = 2;

/// True if the name contains `and`, `or`, `and/or` as words, or a `;`
pub fn has_conjunction(name: &str) -> bool {
    name.contains(SEMICOLON) || tokenize(name).any(|t| CONJUNCTIONS.contains(&t.as_str()))
}

/// Error 3: a conjunction joins two or more actions in one name.
///
/// Action occurrences are counted longest-match-first without overlap, and an
/// occurrence immediately followed by a hyphen ("cool-down") is not an action.
pub fn check_multiple_actions(name: &str, actions: &TermMatcher) -> bool {
    has_conjunction(name) && actions.count_occurrences(name, HyphenPolicy::Exclude) >= MIN_ACTIONS
}
