//! Whole-word and whole-phrase matching of reference vocabularies
//!
//! Terms and names are both tokenized with [`crate::tokenizer`] and compared
//! token by token, so a term can only match complete words ("install" never
//! matches inside "reinstall") and a multi-word term only matches as a
//! contiguous phrase. Punctuation inside a term ("and/or", "make-up") acts as
//! a word separator and needs no escaping.

use crate::tokenizer::{token_spans, tokenize, TokenSpan};
use measure_types::TermList;

/// Whether an occurrence immediately followed by `-` in the raw name counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HyphenPolicy {
    Include,
    /// Skip occurrences such as "air-" in "air-cooled"
    Exclude,
}

/// A term list compiled into token sequences, longest phrase first
#[derive(Debug, Clone, Default)]
pub struct TermMatcher {
    phrases: Vec<Vec<String>>,
    malformed: usize,
}

impl TermMatcher {
    pub fn new(list: &TermList) -> Self {
        Self::from_terms(list.terms())
    }

    pub fn from_terms<S: AsRef<str>>(terms: &[S]) -> Self {
        let mut phrases = Vec::with_capacity(terms.len());
        let mut malformed = 0;

        for term in terms {
            let tokens: Vec<String> = tokenize(term.as_ref()).collect();
            if tokens.is_empty() {
                malformed += 1;
            } else if !phrases.contains(&tokens) {
                phrases.push(tokens);
            }
        }

        // Stable: equal-length phrases keep list order
        phrases.sort_by(|a, b| b.len().cmp(&a.len()));

        Self { phrases, malformed }
    }

    /// Number of usable phrases
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Terms that produced no word tokens and can never match
    pub fn malformed_count(&self) -> usize {
        self.malformed
    }

    /// Longest phrase matching at token `pos`, as its length in tokens
    fn match_at<T: AsRef<str>>(&self, tokens: &[T], pos: usize) -> Option<usize> {
        self.matches_at(tokens, pos).next()
    }

    /// Lengths of every phrase matching at token `pos`, longest first
    fn matches_at<'a, T: AsRef<str>>(
        &'a self,
        tokens: &'a [T],
        pos: usize,
    ) -> impl Iterator<Item = usize> + 'a {
        self.phrases
            .iter()
            .filter(move |phrase| phrase_at(tokens, pos, phrase))
            .map(|phrase| phrase.len())
    }

    /// True if any term occurs in `name` as whole words
    pub fn contains_any(&self, name: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        let tokens: Vec<String> = tokenize(name).collect();
        self.contains_any_tokens(&tokens)
    }

    /// Same as [`TermMatcher::contains_any`] over already tokenized text
    pub fn contains_any_tokens<T: AsRef<str>>(&self, tokens: &[T]) -> bool {
        (0..tokens.len()).any(|pos| self.match_at(tokens, pos).is_some())
    }

    /// True if a term matches starting at the first word of `name`
    pub fn starts_with_any(&self, name: &str) -> bool {
        let tokens: Vec<String> = tokenize(name).collect();
        self.match_at(&tokens, 0).is_some()
    }

    /// Count term occurrences left to right, longest match first, without overlap.
    ///
    /// At each word the longest phrase that matches (and, under
    /// [`HyphenPolicy::Exclude`], is not directly followed by `-`) is counted
    /// and the scan resumes after it. The same term occurring twice counts twice.
    pub fn count_occurrences(&self, name: &str, policy: HyphenPolicy) -> usize {
        if self.is_empty() {
            return 0;
        }
        let spans = token_spans(name);
        let tokens: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();

        let mut count = 0;
        let mut pos = 0;
        while pos < tokens.len() {
            let accepted = self.matches_at(&tokens, pos).find(|&len| {
                policy == HyphenPolicy::Include || !hyphen_follows(name, &spans[pos + len - 1])
            });
            match accepted {
                Some(len) => {
                    count += 1;
                    pos += len;
                }
                None => pos += 1,
            }
        }
        count
    }
}

fn phrase_at<T: AsRef<str>>(tokens: &[T], pos: usize, phrase: &[String]) -> bool {
    pos + phrase.len() <= tokens.len()
        && phrase
            .iter()
            .zip(&tokens[pos..])
            .all(|(term, token)| term == token.as_ref())
}

fn hyphen_follows(name: &str, span: &TokenSpan) -> bool {
    name[span.end..].starts_with('-')
}

/// One-off whole-word check without keeping a compiled matcher
pub fn contains_any<S: AsRef<str>>(name: &str, terms: &[S]) -> bool {
    TermMatcher::from_terms(terms).contains_any(name)
}
