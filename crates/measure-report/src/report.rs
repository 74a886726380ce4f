//! Report assembly: everything a reporter renders, computed once per run

use measure_engine::aggregate::{
    bigram_frequencies, first_word_frequencies, length_summary, summarize, token_counts, top_n,
    total_summary, word_frequencies,
};
use measure_engine::stopwords::StopwordFilter;
use measure_engine::{AttestedGroup, Evaluation};
use measure_types::{
    CategorySummary, Diagnostics, FlaggedRecord, FrequencyEntry, LengthSummary,
};
use serde::Serialize;

/// Flag table plus descriptive statistics for one audit run
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// RFC 3339 timestamp
    pub generated_at: String,
    pub record_count: usize,
    pub length_threshold: usize,
    /// `None` when there are no records
    pub length_summary: Option<LengthSummary>,
    pub token_counts: Vec<usize>,
    pub category_summaries: Vec<CategorySummary>,
    pub total: CategorySummary,
    pub top_words: Vec<FrequencyEntry>,
    pub top_bigrams: Vec<FrequencyEntry>,
    pub top_first_words: Vec<FrequencyEntry>,
    pub attested_synonym_groups: Vec<AttestedGroup>,
    pub records: Vec<FlaggedRecord>,
    pub diagnostics: Diagnostics,
}

impl AuditReport {
    /// Build the report tables from a finished evaluation, keeping `top`
    /// rows of each frequency table
    pub fn build(evaluation: &Evaluation, length_threshold: usize, top: usize) -> Self {
        let records = &evaluation.records;
        let names: Vec<&str> = records.iter().map(|r| r.record.name.as_str()).collect();
        let stopwords = StopwordFilter::default();
        let counts = token_counts(records);

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            record_count: records.len(),
            length_threshold,
            length_summary: length_summary(&counts),
            token_counts: counts,
            category_summaries: summarize(records),
            total: total_summary(records),
            top_words: top_n(&word_frequencies(&names, &stopwords), top).to_vec(),
            top_bigrams: top_n(&bigram_frequencies(&names, &stopwords), top).to_vec(),
            top_first_words: top_n(
                &first_word_frequencies(records.iter().map(|r| &r.record)),
                top,
            )
            .to_vec(),
            attested_synonym_groups: evaluation.synonyms.groups().to_vec(),
            records: records.clone(),
            diagnostics: evaluation.diagnostics.clone(),
        }
    }

    /// Records with at least one flag raised
    pub fn flagged_records(&self) -> impl Iterator<Item = &FlaggedRecord> {
        self.records.iter().filter(|r| r.flags.any())
    }
}
