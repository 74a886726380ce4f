//! Word and bigram tokenization of measure names
//!
//! Any character that is not alphanumeric separates words, so hyphenated
//! compounds split ("make-up" → "make", "up") and punctuation disappears.
//! Tokens are lower-cased and never deduplicated.

use crate::stopwords::StopwordFilter;

/// Lazy iterator over the lower-cased word tokens of a name.
///
/// A clone taken before iterating (or a fresh call to [`tokenize`]) replays
/// the same sequence.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        next_span(self.text, &mut self.pos).map(|span| span.text)
    }
}

/// A token with its byte range in the original name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

fn next_span(text: &str, pos: &mut usize) -> Option<TokenSpan> {
    let rest = &text[*pos..];
    let offset = rest.find(is_word_char)?;
    let word = &rest[offset..];
    let len = word.find(|c: char| !is_word_char(c)).unwrap_or(word.len());

    let start = *pos + offset;
    let end = start + len;
    *pos = end;

    Some(TokenSpan {
        text: word[..len].to_lowercase(),
        start,
        end,
    })
}

/// Split a name into lower-cased word tokens, left to right
pub fn tokenize(name: &str) -> Tokens<'_> {
    Tokens { text: name, pos: 0 }
}

/// Word tokens with byte offsets into `name`
pub fn token_spans(name: &str) -> Vec<TokenSpan> {
    let mut pos = 0;
    std::iter::from_fn(|| next_span(name, &mut pos)).collect()
}

/// Consecutive word pairs after stopword removal, joined by a single space
pub fn bigramize(name: &str, stopwords: &StopwordFilter) -> Vec<String> {
    let words: Vec<String> = stopwords.filter(tokenize(name)).collect();
    words
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect()
}

/// Number of whitespace-delimited chunks, punctuation included
pub fn whitespace_token_count(name: &str) -> usize {
    name.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let tokens: Vec<String> = tokenize("Install VFDs, on (AHU) fans.").collect();
        assert_eq!(tokens, vec!["install", "vfds", "on", "ahu", "fans"]);
    }

    #[test]
    fn test_hyphen_is_a_separator() {
        let tokens: Vec<String> = tokenize("Provide make-up air").collect();
        assert_eq!(tokens, vec!["provide", "make", "up", "air"]);
    }

    #[test]
    fn test_empty_name_has_no_tokens() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("  -- ; ").count(), 0);
        assert!(token_spans("").is_empty());
        assert_eq!(whitespace_token_count(""), 0);
    }

    #[test]
    fn test_tokens_keep_repeats() {
        let tokens: Vec<String> = tokenize("Seal and seal again").collect();
        assert_eq!(tokens, vec!["seal", "and", "seal", "again"]);
    }

    #[test]
    fn test_sequence_is_restartable() {
        let tokens = tokenize("Replace pump seals");
        let first: Vec<String> = tokens.clone().collect();
        let second: Vec<String> = tokens.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_spans_point_into_name() {
        let name = "Re-lamp T12 fixtures";
        let spans = token_spans(name);
        assert_eq!(spans.len(), 4);
        assert_eq!(&name[spans[0].start..spans[0].end], "Re");
        assert_eq!(&name[spans[0].end..spans[0].end + 1], "-");
        assert_eq!(spans[2].text, "t12");
    }

    #[test]
    fn test_non_ascii_letters_stay_in_words() {
        let tokens: Vec<String> = tokenize("Café façade").collect();
        assert_eq!(tokens, vec!["café", "façade"]);
    }

    #[test]
    fn test_bigrams_skip_stopwords() {
        let stopwords = StopwordFilter::default();
        let bigrams = bigramize("Install a flow meter on the boiler", &stopwords);
        assert_eq!(
            bigrams,
            vec!["install flow", "flow meter", "meter boiler"]
        );
    }

    #[test]
    fn test_bigrams_need_two_words() {
        let stopwords = StopwordFilter::default();
        assert!(bigramize("Insulate", &stopwords).is_empty());
        assert!(bigramize("", &stopwords).is_empty());
    }

    #[test]
    fn test_whitespace_count_keeps_punctuation_chunks() {
        assert_eq!(whitespace_token_count("Install flow rate meters"), 4);
        assert_eq!(whitespace_token_count("Seal ducts - attic"), 4);
    }

    #[test]
    fn test_rejoin_reconstructs_word_sequence() {
        let name = "Install Flow-Rate meters, (new)";
        let rejoined = tokenize(name).collect::<Vec<_>>().join(" ");
        assert_eq!(rejoined, "install flow rate meters new");
    }
}
