//! Audit configuration
//!
//! TOML file naming the reference vocabularies and analysis settings:
//!
//! ```toml
//! [analysis]
//! length_threshold = 10
//! top_n = 20
//! lemmatizer = "plural"
//! lemma_dictionary = "lemmas.tsv"
//!
//! [terms]
//! tentative = "terms/tentative.txt"
//! actions = "terms/actions.txt"
//! elements = "terms/elements.json"
//! vague = "terms/vague.txt"
//! synonyms = "terms/synonyms.json"
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

use anyhow::Context;
use measure_engine::rules::DEFAULT_LENGTH_THRESHOLD;
use measure_engine::{EngineConfig, LemmatizerKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Locations of the reference vocabularies
    #[serde(default)]
    pub terms: TermPaths,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl AuditConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::from_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Parse configuration from a TOML string. Relative paths stay relative
    /// to the working directory.
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// Resolve a configured path against the config file's directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Term list locations with relative paths resolved
    pub fn term_paths(&self) -> TermPaths {
        let resolve = |p: &Option<PathBuf>| p.as_deref().map(|p| self.resolve(p));
        TermPaths {
            tentative: resolve(&self.terms.tentative),
            actions: resolve(&self.terms.actions),
            elements: resolve(&self.terms.elements),
            vague: resolve(&self.terms.vague),
            synonyms: resolve(&self.terms.synonyms),
        }
    }

    pub fn lemma_dictionary(&self) -> Option<PathBuf> {
        self.analysis
            .lemma_dictionary
            .as_deref()
            .map(|p| self.resolve(p))
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            length_threshold: self.analysis.length_threshold,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Names with more words than this are flagged (default: 10)
    #[serde(default = "default_length_threshold")]
    pub length_threshold: usize,
    /// Rows kept in each frequency table (default: 20)
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default)]
    pub lemmatizer: LemmatizerKind,
    /// Optional `word<TAB>lemma` table consulted before the lemmatizer
    #[serde(default)]
    pub lemma_dictionary: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            length_threshold: default_length_threshold(),
            top_n: default_top_n(),
            lemmatizer: LemmatizerKind::default(),
            lemma_dictionary: None,
        }
    }
}

fn default_length_threshold() -> usize {
    DEFAULT_LENGTH_THRESHOLD
}

fn default_top_n() -> usize {
    20
}

/// Paths of the five reference vocabularies; an absent entry means an empty list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermPaths {
    #[serde(default)]
    pub tentative: Option<PathBuf>,
    #[serde(default)]
    pub actions: Option<PathBuf>,
    #[serde(default)]
    pub elements: Option<PathBuf>,
    #[serde(default)]
    pub vague: Option<PathBuf>,
    #[serde(default)]
    pub synonyms: Option<PathBuf>,
}
