use crate::patterns::TermMatcher;

/// Error 1: the name hedges instead of stating an action ("consider", "evaluate")
pub fn check_tentative_action(name: &str, tentative: &TermMatcher) -> bool {
    tentative.contains_any(name)
}
