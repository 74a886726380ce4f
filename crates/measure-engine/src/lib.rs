//! Lexical best-practice checks for efficiency measure names
//!
//! A run has two phases. [`MeasureEngine::analyze_corpus`] scans every name
//! for mixed synonym usage, then each record is checked against the seven
//! rules:
//!
//! | Code | Rule |
//! |------|------|
//! | 1 | Tentative action ("consider", "evaluate") |
//! | 3 | More than one action joined by a conjunction |
//! | 4 | More words than the configured threshold |
//! | 5 | Name does not start with an action |
//! | 6 | No building element mentioned |
//! | 7 | Vague wording ("improve", "optimize") |
//! | 8 | Term from a synonym group the corpus mixes |
//!
//! ```
//! use measure_engine::{EngineConfig, MeasureEngine, TermSets};
//! use measure_engine::lemmatizer::PluralLemmatizer;
//! use measure_types::{MeasureRecord, TermList};
//!
//! let terms = TermSets {
//!     actions: TermList::new(["install"]),
//!     elements: TermList::new(["meter"]),
//!     ..TermSets::default()
//! };
//! let engine = MeasureEngine::new(terms, EngineConfig::default())
//!     .unwrap()
//!     .with_lemmatizer(Box::new(PluralLemmatizer));
//! let evaluation = engine.evaluate(&[MeasureRecord::new("1", "Water", "Install flow rate meters")]);
//! assert!(!evaluation.records[0].flags.any());
//! ```

pub mod aggregate;
pub mod error;
pub mod lemmatizer;
pub mod patterns;
pub mod rules;
pub mod stopwords;
pub mod tokenizer;

pub use error::EngineError;
pub use lemmatizer::{Lemmatizer, LemmatizerKind};
pub use patterns::{HyphenPolicy, TermMatcher};
pub use rules::{AttestedGroup, SynonymAnalysis};

use measure_types::{
    Diagnostics, ErrorFlags, ErrorKind, FlaggedRecord, MeasureRecord, SynonymGroup, TermList,
    TermListKind,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Reference vocabularies, one per rule family
#[derive(Debug, Clone, Default)]
pub struct TermSets {
    pub tentative: TermList,
    /// Used by Errors 3 and 5
    pub actions: TermList,
    /// Already filtered to `Element` rows
    pub elements: TermList,
    pub vague: TermList,
    pub synonyms: Vec<SynonymGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Names with more whitespace-delimited words than this are excessive
    pub length_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            length_threshold: rules::DEFAULT_LENGTH_THRESHOLD,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.length_threshold == 0 {
            return Err(EngineError::InvalidConfig(
                "length_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of a full run
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// One entry per input record, in input order
    pub records: Vec<FlaggedRecord>,
    pub synonyms: SynonymAnalysis,
    pub diagnostics: Diagnostics,
}

/// MeasureEngine entry point
pub struct MeasureEngine {
    tentative: TermMatcher,
    actions: TermMatcher,
    elements: TermMatcher,
    vague: TermMatcher,
    synonym_groups: Vec<SynonymGroup>,
    lemmatizer: Option<Box<dyn Lemmatizer>>,
    config: EngineConfig,
    term_diagnostics: Diagnostics,
}

impl MeasureEngine {
    /// Compile the vocabularies. Without [`MeasureEngine::with_lemmatizer`]
    /// Error 6 matches raw names only and every record is reported as a
    /// lemmatizer fallback.
    pub fn new(terms: TermSets, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let tentative = TermMatcher::new(&terms.tentative);
        let actions = TermMatcher::new(&terms.actions);
        let elements = TermMatcher::new(&terms.elements);
        let vague = TermMatcher::new(&terms.vague);

        let mut term_diagnostics = Diagnostics::default();
        for (kind, matcher) in [
            (TermListKind::Tentative, &tentative),
            (TermListKind::Action, &actions),
            (TermListKind::Element, &elements),
            (TermListKind::Vague, &vague),
        ] {
            term_diagnostics.malformed_terms += matcher.malformed_count();
            if matcher.is_empty() {
                warn!("{} term list is empty; dependent rules are disabled", kind);
                term_diagnostics.empty_term_lists.push(kind);
            }
        }

        let synonym_groups: Vec<SynonymGroup> = terms
            .synonyms
            .into_iter()
            .filter(|group| !group.terms.is_empty())
            .collect();
        if synonym_groups.is_empty() {
            warn!("synonym group list is empty; Error 8 is disabled");
            term_diagnostics.empty_term_lists.push(TermListKind::Synonym);
        }

        Ok(Self {
            tentative,
            actions,
            elements,
            vague,
            synonym_groups,
            lemmatizer: None,
            config,
            term_diagnostics,
        })
    }

    pub fn with_lemmatizer(mut self, lemmatizer: Box<dyn Lemmatizer>) -> Self {
        self.lemmatizer = Some(lemmatizer);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn lemmatizer_name(&self) -> Option<&str> {
        self.lemmatizer.as_deref().map(|l| l.name())
    }

    /// Phase 1: corpus-wide synonym scan. Must finish before any record is checked.
    pub fn analyze_corpus(&self, records: &[MeasureRecord]) -> SynonymAnalysis {
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        let analysis = SynonymAnalysis::from_corpus(&names, &self.synonym_groups);
        debug!(
            groups = self.synonym_groups.len(),
            attested = analysis.groups().len(),
            terms = analysis.terms().len(),
            "synonym pre-pass complete"
        );
        analysis
    }

    /// Evaluate all seven rules for one name
    pub fn check_name(&self, name: &str, synonyms: &SynonymAnalysis) -> ErrorFlags {
        let mut flags = ErrorFlags::default();
        for kind in ErrorKind::ALL {
            flags.set(kind, self.check_rule(kind, name, synonyms));
        }
        flags
    }

    /// Evaluate a single rule; no rule reads another's result
    pub fn check_rule(&self, kind: ErrorKind, name: &str, synonyms: &SynonymAnalysis) -> bool {
        match kind {
            ErrorKind::TentativeAction => rules::check_tentative_action(name, &self.tentative),
            ErrorKind::MultipleActions => rules::check_multiple_actions(name, &self.actions),
            ErrorKind::ExcessiveLength => {
                rules::check_excessive_length(name, self.config.length_threshold)
            }
            ErrorKind::MissingAction => rules::check_missing_action(name, &self.actions),
            ErrorKind::MissingElement => {
                rules::check_missing_element(name, &self.elements, self.lemmatizer.as_deref())
            }
            ErrorKind::VagueTerminology => rules::check_vague_terminology(name, &self.vague),
            ErrorKind::SynonymousTerminology => {
                rules::check_synonymous_terminology(name, synonyms)
            }
        }
    }

    /// Phase 2: flag one record against a completed synonym analysis
    pub fn evaluate_record(
        &self,
        record: &MeasureRecord,
        synonyms: &SynonymAnalysis,
    ) -> FlaggedRecord {
        FlaggedRecord {
            record: record.clone(),
            token_count: tokenizer::whitespace_token_count(&record.name),
            flags: self.check_name(&record.name, synonyms),
            lemmatizer_fallback: self.lemmatizer.is_none() && !self.elements.is_empty(),
        }
    }

    /// Flag every record. Input defects degrade individual rules and are
    /// reported in [`Evaluation::diagnostics`]; they never stop the run.
    pub fn evaluate(&self, records: &[MeasureRecord]) -> Evaluation {
        let synonyms = self.analyze_corpus(records);

        let flagged: Vec<FlaggedRecord> = records
            .iter()
            .map(|record| self.evaluate_record(record, &synonyms))
            .collect();

        let mut diagnostics = self.term_diagnostics.clone();
        diagnostics.lemmatizer = self.lemmatizer_name().map(str::to_string);
        diagnostics.empty_names = records
            .iter()
            .filter(|r| r.name.trim().is_empty())
            .map(|r| r.id.clone())
            .collect();
        diagnostics.lemmatizer_fallback = flagged.iter().filter(|r| r.lemmatizer_fallback).count();

        if !diagnostics.empty_names.is_empty() {
            warn!(
                count = diagnostics.empty_names.len(),
                "records with empty names evaluated at boundary values"
            );
        }
        if diagnostics.lemmatizer_fallback > 0 {
            warn!(
                count = diagnostics.lemmatizer_fallback,
                "no lemmatizer configured; Error 6 matched raw names only"
            );
        }

        info!(
            records = flagged.len(),
            flagged = flagged.iter().filter(|r| r.flags.any()).count(),
            "evaluation complete"
        );

        Evaluation {
            records: flagged,
            synonyms,
            diagnostics,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::lemmatizer::PluralLemmatizer;
    use proptest::prelude::*;

    fn engine() -> MeasureEngine {
        let terms = TermSets {
            tentative: TermList::new(["consider"]),
            actions: TermList::new(["install", "replace"]),
            elements: TermList::new(["meter", "lamp"]),
            vague: TermList::new(["improve"]),
            synonyms: vec![SynonymGroup::new("S01", ["led", "light emitting diode"])],
        };
        MeasureEngine::new(terms, EngineConfig::default())
            .unwrap()
            .with_lemmatizer(Box::new(PluralLemmatizer))
    }

    proptest! {
        /// Property: any input yields one record with exactly seven flags
        #[test]
        fn every_name_gets_seven_flags(names in prop::collection::vec("\\PC{0,80}", 0..8)) {
            let records: Vec<MeasureRecord> = names
                .iter()
                .enumerate()
                .map(|(i, name)| MeasureRecord::new(&i.to_string(), "HVAC", name))
                .collect();
            let evaluation = engine().evaluate(&records);
            prop_assert_eq!(evaluation.records.len(), records.len());
            for record in &evaluation.records {
                prop_assert_eq!(record.flags.iter().count(), 7);
            }
        }

        /// Property: the length rule agrees with the whitespace word count
        #[test]
        fn length_flag_tracks_word_count(words in prop::collection::vec("[a-z]{1,8}", 0..20)) {
            let name = words.join(" ");
            let engine = engine();
            let flags = engine.check_name(&name, &SynonymAnalysis::default());
            prop_assert_eq!(
                flags.get(ErrorKind::ExcessiveLength),
                words.len() > rules::DEFAULT_LENGTH_THRESHOLD
            );
        }
    }
}
