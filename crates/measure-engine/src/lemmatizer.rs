//! Lemmatization capability
//!
//! The engine only needs `word -> root form`. Which dictionary or algorithm
//! provides that is a collaborator choice; the rules never depend on a
//! specific implementation.

use crate::error::EngineError;
use crate::tokenizer::tokenize;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Reduce a lower-case word to its dictionary root form.
///
/// Implementations must be deterministic and hold no mutable state.
pub trait Lemmatizer: Send + Sync {
    /// Short name reported in run diagnostics
    fn name(&self) -> &str;

    fn lemmatize(&self, word: &str) -> String;
}

/// Lemmatize a name token by token and rejoin with single spaces
pub fn lemmatize_name(name: &str, lemmatizer: &dyn Lemmatizer) -> String {
    tokenize(name)
        .map(|token| lemmatizer.lemmatize(&token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Irregular plurals the suffix rules get wrong
const PLURAL_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("people", "person"),
    ("shelves", "shelf"),
    ("series", "series"),
    ("species", "species"),
    ("data", "datum"),
    ("criteria", "criterion"),
];

/// Noun suffix detachment rules, tried in order
const PLURAL_SUFFIXES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("ies", "y"),
    ("men", "man"),
    ("s", ""),
];

/// Endings that look plural but are singular nouns ("glass", "bus", "analysis")
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is", "ous"];

/// Rule-based noun lemmatizer in the spirit of WordNet's morphy detachment rules.
///
/// Handles regular plurals; anything else is returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct PluralLemmatizer;

impl Lemmatizer for PluralLemmatizer {
    fn name(&self) -> &str {
        "plural"
    }

    fn lemmatize(&self, word: &str) -> String {
        if let Some((_, lemma)) = PLURAL_EXCEPTIONS.iter().find(|(w, _)| *w == word) {
            return lemma.to_string();
        }
        if word.chars().count() <= 3 || !word.chars().all(char::is_alphabetic) {
            return word.to_string();
        }
        if SINGULAR_ENDINGS.iter().any(|end| word.ends_with(end)) {
            return word.to_string();
        }

        for (suffix, replacement) in PLURAL_SUFFIXES {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.chars().count() >= 2 {
                    return format!("{}{}", stem, replacement);
                }
            }
        }
        word.to_string()
    }
}

/// Porter2 stemmer standing in for a lemmatizer.
///
/// Stems are not always dictionary words ("batteries" -> "batteri"), so this
/// helps most when the vocabularies hold short roots.
pub struct StemmingLemmatizer {
    stemmer: Stemmer,
}

impl Default for StemmingLemmatizer {
    fn default() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Lemmatizer for StemmingLemmatizer {
    fn name(&self) -> &str {
        "stemmer"
    }

    fn lemmatize(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }
}

/// Explicit word → lemma table, optionally layered over another lemmatizer
/// for words the table does not cover.
pub struct DictionaryLemmatizer {
    entries: HashMap<String, String>,
    fallback: Option<Box<dyn Lemmatizer>>,
    name: String,
}

impl DictionaryLemmatizer {
    pub fn new(entries: HashMap<String, String>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(word, lemma)| (word.to_lowercase(), lemma.to_lowercase()))
            .collect();
        Self {
            entries,
            fallback: None,
            name: "dictionary".to_string(),
        }
    }

    /// Parse `word<whitespace>lemma` lines; blank lines and `#` comments are skipped
    pub fn from_tsv(content: &str) -> Result<Self, EngineError> {
        let mut entries = HashMap::new();
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(word), Some(lemma), None) => {
                    entries.insert(word.to_string(), lemma.to_string());
                }
                _ => {
                    return Err(EngineError::InvalidDictionary {
                        line: index + 1,
                        content: line.to_string(),
                    })
                }
            }
        }
        Ok(Self::new(entries))
    }

    pub fn with_fallback(mut self, fallback: Box<dyn Lemmatizer>) -> Self {
        self.name = format!("dictionary+{}", fallback.name());
        self.fallback = Some(fallback);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn lemmatize(&self, word: &str) -> String {
        match self.entries.get(word) {
            Some(lemma) => lemma.clone(),
            None => match &self.fallback {
                Some(fallback) => fallback.lemmatize(word),
                None => word.to_string(),
            },
        }
    }
}

/// Built-in lemmatizer selection for configuration files and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LemmatizerKind {
    #[default]
    Plural,
    Stemmer,
    /// No lemmatizer: Error 6 falls back to raw-name matching
    None,
}

impl LemmatizerKind {
    pub fn build(self) -> Option<Box<dyn Lemmatizer>> {
        match self {
            LemmatizerKind::Plural => Some(Box::new(PluralLemmatizer)),
            LemmatizerKind::Stemmer => Some(Box::new(StemmingLemmatizer::default())),
            LemmatizerKind::None => None,
        }
    }
}

impl FromStr for LemmatizerKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plural" => Ok(LemmatizerKind::Plural),
            "stemmer" | "porter" => Ok(LemmatizerKind::Stemmer),
            "none" | "off" => Ok(LemmatizerKind::None),
            other => Err(EngineError::UnknownLemmatizer(other.to_string())),
        }
    }
}

impl fmt::Display for LemmatizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LemmatizerKind::Plural => "plural",
            LemmatizerKind::Stemmer => "stemmer",
            LemmatizerKind::None => "none",
        };
        f.write_str(name)
    }
}
