use crate::patterns::TermMatcher;

/// Error 7: the name relies on terms too broad to act on ("improve", "optimize", "system")
pub fn check_vague_terminology(name: &str, vague: &TermMatcher) -> bool {
    vague.contains_any(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vague_terms() -> TermMatcher {
        TermMatcher::from_terms(&["improve", "optimize", "upgrade", "energy efficient"])
    }

    #[test]
    fn test_flags_vague_terms() {
        assert!(check_vague_terminology("Improve lighting", &vague_terms()));
        assert!(check_vague_terminology(
            "Install energy efficient motors",
            &vague_terms()
        ));
    }

    #[test]
    fn test_accepts_specific_name() {
        assert!(!check_vague_terminology(
            "Replace T12 lamps with LED tubes",
            &vague_terms()
        ));
        assert!(!check_vague_terminology(
            "Install efficient motors",
            &vague_terms()
        ));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(!check_vague_terminology("", &vague_terms()));
        assert!(!check_vague_terminology("Improve lighting", &TermMatcher::default()));
    }
}
