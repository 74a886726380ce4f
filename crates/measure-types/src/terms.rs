//! Reference vocabularies consumed by the naming rules

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Which reference vocabulary a list plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermListKind {
    Tentative,
    Action,
    Element,
    Vague,
    Synonym,
}

impl fmt::Display for TermListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TermListKind::Tentative => "tentative",
            TermListKind::Action => "action",
            TermListKind::Element => "element",
            TermListKind::Vague => "vague",
            TermListKind::Synonym => "synonym",
        };
        f.write_str(name)
    }
}

/// An ordered set of phrases matched case-insensitively.
///
/// Duplicates (ignoring case and surrounding whitespace) and blank entries
/// are dropped on construction; first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TermList {
    terms: Vec<String>,
}

impl TermList {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let terms = terms
            .into_iter()
            .map(|t| t.into().trim().to_string())
            .filter(|t| !t.is_empty())
            .filter(|t| seen.insert(t.to_lowercase()))
            .collect();
        Self { terms }
    }

    /// Keep only rows whose `type` column equals `kind` (case-insensitive).
    ///
    /// The building-element vocabulary ships mixed with other row types and
    /// only `Element` rows take part in matching.
    pub fn from_rows_of_type(rows: &[TermRow], kind: &str) -> Self {
        Self::new(
            rows.iter()
                .filter(|row| {
                    row.kind
                        .as_deref()
                        .is_some_and(|k| k.trim().eq_ignore_ascii_case(kind))
                })
                .map(|row| row.term.clone()),
        )
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl From<Vec<String>> for TermList {
    fn from(terms: Vec<String>) -> Self {
        Self::new(terms)
    }
}

impl From<TermList> for Vec<String> {
    fn from(list: TermList) -> Self {
        list.terms
    }
}

impl<'a> FromIterator<&'a str> for TermList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// A row of a typed vocabulary file, e.g. `{"term": "boiler", "type": "Element"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRow {
    pub term: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Interchangeable spellings or abbreviations sharing a category code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymGroup {
    pub code: String,
    pub terms: Vec<String>,
}

impl SynonymGroup {
    pub fn new<S: Into<String>>(code: &str, terms: impl IntoIterator<Item = S>) -> Self {
        Self {
            code: code.to_string(),
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }
}
