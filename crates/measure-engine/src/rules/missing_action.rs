use crate::patterns::TermMatcher;

/// Error 5: the name does not open with an action word.
///
/// Only a match anchored at the first word token counts; leading whitespace
/// and punctuation ("- Replace aerators") are skipped to reach it. An action
/// later in the name ("Lighting retrofit") still leaves the error in place. An empty name
/// has no first word and is flagged. An empty action list disables the rule.
pub fn check_missing_action(name: &str, actions: &TermMatcher) -> bool {
    if actions.is_empty() {
        return false;
    }
    !actions.starts_with_any(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action_terms() -> TermMatcher {
        TermMatcher::from_terms(&["install", "replace", "retrofit", "turn off"])
    }

    #[test]
    fn test_leading_action_passes() {
        assert!(!check_missing_action("Install flow rate meters", &action_terms()));
        assert!(!check_missing_action(
            "Turn off exhaust fans when unoccupied",
            &action_terms()
        ));
    }

    #[test]
    fn test_unlisted_leading_verb_is_flagged() {
        assert!(check_missing_action("Capture condensate", &action_terms()));
    }

    #[test]
    fn test_action_later_in_name_does_not_count() {
        assert!(check_missing_action("Lighting retrofit", &action_terms()));
    }

    #[test]
    fn test_leading_punctuation_is_ignored() {
        assert!(!check_missing_action("- Replace aerators", &action_terms()));
        assert!(check_missing_action("- Capture condensate", &action_terms()));
        assert!(check_missing_action(" -- ", &action_terms()));
    }

    #[test]
    fn test_inflected_form_is_not_the_term() {
        assert!(check_missing_action("Installing meters", &action_terms()));
    }

    #[test]
    fn test_empty_name_is_flagged() {
        assert!(check_missing_action("", &action_terms()));
    }

    #[test]
    fn test_empty_list_disables_rule() {
        assert!(!check_missing_action("Capture condensate", &TermMatcher::default()));
        assert!(!check_missing_action("", &TermMatcher::default()));
    }
}
