//! Error 8: synonymous terminology
//!
//! Synonyms are only a problem when the corpus actually mixes them, so this
//! rule runs in two phases. [`SynonymAnalysis::from_corpus`] scans every name
//! once and keeps the groups with at least two attested alternatives; the
//! combined vocabulary of those groups is then matched per record by
//! [`check_synonymous_terminology`]. The analysis must be complete before the
//! first record is checked.

use crate::patterns::TermMatcher;
use crate::tokenizer::tokenize;
use measure_types::{SynonymGroup, TermList};
use serde::{Deserialize, Serialize};

/// Alternatives that must appear in the corpus for a group to be kept
pub const MIN_ATTESTED_ALTERNATIVES: usize = 2;

/// A synonym group that survived the corpus scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestedGroup {
    pub code: String,
    /// Alternatives seen somewhere in the corpus, in group order
    pub attested: Vec<String>,
    pub alternatives: Vec<String>,
}

/// Result of the corpus-wide pre-pass
#[derive(Debug, Clone, Default)]
pub struct SynonymAnalysis {
    groups: Vec<AttestedGroup>,
    terms: TermList,
    matcher: TermMatcher,
}

impl SynonymAnalysis {
    /// Scan the whole corpus and derive the synonym vocabulary
    pub fn from_corpus<S: AsRef<str>>(names: &[S], groups: &[SynonymGroup]) -> Self {
        let corpus: Vec<Vec<String>> = names
            .iter()
            .map(|name| tokenize(name.as_ref()).collect())
            .collect();

        let mut attested_groups = Vec::new();
        for group in groups {
            let alternatives = TermList::new(group.terms.iter().cloned());
            let attested: Vec<String> = alternatives
                .iter()
                .filter(|alternative| {
                    let matcher = TermMatcher::from_terms(&[*alternative]);
                    corpus.iter().any(|tokens| matcher.contains_any_tokens(tokens))
                })
                .map(str::to_string)
                .collect();

            if attested.len() >= MIN_ATTESTED_ALTERNATIVES {
                attested_groups.push(AttestedGroup {
                    code: group.code.clone(),
                    attested,
                    alternatives: alternatives.terms().to_vec(),
                });
            }
        }

        Self::from_groups(attested_groups)
    }

    fn from_groups(groups: Vec<AttestedGroup>) -> Self {
        let terms = TermList::new(
            groups
                .iter()
                .flat_map(|group| group.alternatives.iter().cloned()),
        );
        let matcher = TermMatcher::new(&terms);
        Self {
            groups,
            terms,
            matcher,
        }
    }

    /// Groups with at least two alternatives in use
    pub fn groups(&self) -> &[AttestedGroup] {
        &self.groups
    }

    /// Combined vocabulary of the surviving groups
    pub fn terms(&self) -> &TermList {
        &self.terms
    }

    pub fn matcher(&self) -> &TermMatcher {
        &self.matcher
    }
}

/// Error 8: the name uses a term from a synonym group the corpus mixes
pub fn check_synonymous_terminology(name: &str, analysis: &SynonymAnalysis) -> bool {
    analysis.matcher().contains_any(name)
}
