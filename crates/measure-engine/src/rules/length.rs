use crate::tokenizer::whitespace_token_count;

/// Names longer than this many whitespace-delimited words are excessive by default
pub const DEFAULT_LENGTH_THRESHOLD: usize = 10;

/// Error 4: more whitespace-delimited words than `threshold`
pub fn check_excessive_length(name: &str, threshold: usize) -> bool {
    whitespace_token_count(name) > threshold
}
