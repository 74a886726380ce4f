use crate::flags::{ErrorFlags, ErrorKind};
use crate::terms::TermListKind;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MeasureRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, alias = "document", deserialize_with = "null_as_empty")]
    pub source_document: String,
    #[serde(default, alias = "category", deserialize_with = "null_as_empty")]
    pub category_level1: String,
    #[serde(default)]
    pub category_level2: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String, // Missing or null names evaluate as empty strings
}

impl MeasureRecord {
    pub fn new(id: &str, category_level1: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            source_document: String::new(),
            category_level1: category_level1.to_string(),
            category_level2: None,
            name: name.to_string(),
        }
    }
}

/// A record together with its rule outcomes; the record itself is never mutated
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlaggedRecord {
    #[serde(flatten)]
    pub record: MeasureRecord,
    pub token_count: usize, // Whitespace-delimited
    #[serde(flatten)]
    pub flags: ErrorFlags,
    /// Error 6 evaluated against the raw name only
    #[serde(default)]
    pub lemmatizer_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total_count: u64,
    pub error_counts: [u64; 7], // Indexed by ErrorKind::index()
}

impl CategorySummary {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            total_count: 0,
            error_counts: [0; 7],
        }
    }

    pub fn count(&self, kind: ErrorKind) -> u64 {
        self.error_counts[kind.index()]
    }

    pub fn add(&mut self, flags: &ErrorFlags) {
        self.total_count += 1;
        for (kind, flagged) in flags.iter() {
            self.error_counts[kind.index()] += u64::from(flagged);
        }
    }

    /// Share of records in this category showing `kind`, in percent
    pub fn percent(&self, kind: ErrorKind) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.count(kind) as f64 * 100.0 / self.total_count as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrequencyEntry {
    pub term: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LengthSummary {
    pub count: usize,
    pub min: f64,
    pub mean: f64,
    pub median: f64,
    pub max: f64,
}

/// Degraded evaluation paths taken during a run.
///
/// Nothing here is fatal; the flag table is always complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Diagnostics {
    /// Ids of records evaluated with an empty name
    pub empty_names: Vec<String>,
    pub empty_term_lists: Vec<TermListKind>,
    /// Terms that reduce to no word tokens and can never match
    pub malformed_terms: usize,
    /// Input rows that could not be read as records
    pub skipped_records: usize,
    pub lemmatizer: Option<String>,
    /// Records whose Error 6 used raw-name matching only
    pub lemmatizer_fallback: usize,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        self.empty_names.is_empty()
            && self.empty_term_lists.is_empty()
            && self.malformed_terms == 0
            && self.skipped_records == 0
            && self.lemmatizer_fallback == 0
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "id must be a string or number, found {}",
            other
        ))),
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
