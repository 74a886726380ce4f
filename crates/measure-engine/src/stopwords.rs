//! Stopword filtering
//!
//! The reference set is the Snowball English stop list, embedded and built
//! once. The tokenizer splits on apostrophes, so the fragments of split
//! contractions are stopwords too. Frequency tables and bigrams are
//! computed after removing both.

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Snowball English stop list
pub const SNOWBALL_ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "would",
    "should", "could", "ought", "i'm", "you're", "he's", "she's", "it's", "we're", "they're",
    "i've", "you've", "we've", "they've", "i'd", "you'd", "he'd", "she'd", "we'd", "they'd",
    "i'll", "you'll", "he'll", "she'll", "we'll", "they'll", "isn't", "aren't", "wasn't",
    "weren't", "hasn't", "haven't", "hadn't", "doesn't", "don't", "didn't", "won't",
    "wouldn't", "shan't", "shouldn't", "can't", "cannot", "couldn't", "mustn't", "let's",
    "that's", "who's", "what's", "here's", "there's", "when's", "where's", "why's", "how's",
    "a", "an", "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at",
    "by", "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very",
];

/// Pieces left behind when the tokenizer splits a contraction or
/// possessive at its apostrophe ("owner's" gives "s", "don't" gives "don")
pub const CONTRACTION_FRAGMENTS: &[&str] = &[
    "s", "t", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn", "doesn",
    "don", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan", "shouldn",
    "wasn", "weren", "won", "wouldn",
];

lazy_static! {
    static ref DEFAULT_FILTER: StopwordFilter = {
        let mut filter = StopwordFilter::from_list(SNOWBALL_ENGLISH);
        filter.add_stopwords(CONTRACTION_FRAGMENTS);
        filter
    };
}

/// A stopword set that can be extended per run
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: HashSet<String>, // lowercase
}

impl Default for StopwordFilter {
    /// Snowball list plus contraction fragments
    fn default() -> Self {
        DEFAULT_FILTER.clone()
    }
}

impl StopwordFilter {
    /// Create a filter that removes nothing
    pub fn empty() -> Self {
        Self {
            stopwords: HashSet::new(),
        }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Lazily drop stopwords from a token stream
    pub fn filter<'a, I>(&'a self, tokens: I) -> impl Iterator<Item = String> + 'a
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: 'a,
    {
        tokens.into_iter().filter(move |t| !self.is_stopword(t))
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
