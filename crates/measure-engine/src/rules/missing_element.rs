use crate::lemmatizer::{lemmatize_name, Lemmatizer};
use crate::patterns::TermMatcher;

/// Error 6: the name does not mention a building element.
///
/// The raw name is tried first, then its lemmatized form so that plurals
/// ("meters") find singular vocabulary entries ("meter"). Without a
/// lemmatizer only the raw name is checked. An empty element list disables
/// the rule.
pub fn check_missing_element(
    name: &str,
    elements: &TermMatcher,
    lemmatizer: Option<&dyn Lemmatizer>,
) -> bool {
    if elements.is_empty() {
        return false;
    }
    if elements.contains_any(name) {
        return false;
    }
    match lemmatizer {
        Some(lemmatizer) => !elements.contains_any(&lemmatize_name(name, lemmatizer)),
        None => true,
    }
}
