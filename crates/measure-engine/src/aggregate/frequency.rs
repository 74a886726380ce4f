//! Word, bigram and first-word frequency tables
//!
//! Tables are sorted by count, highest first. Equal counts are ordered
//! alphabetically so the output is identical across runs.

use super::summary::category_of;
use crate::stopwords::StopwordFilter;
use crate::tokenizer::{bigramize, tokenize};
use measure_types::{FrequencyEntry, MeasureRecord};
use std::collections::{HashMap, HashSet};

/// Count occurrences and sort into a frequency table
pub fn count_terms<I>(terms: I) -> Vec<FrequencyEntry>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, u64> = HashMap::new();
    for term in terms {
        *counts.entry(term).or_insert(0) += 1;
    }

    let mut entries: Vec<FrequencyEntry> = counts
        .into_iter()
        .map(|(term, count)| FrequencyEntry { term, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    entries
}

/// Word frequencies after stopword removal; repeated words count each time
pub fn word_frequencies<S: AsRef<str>>(
    names: &[S],
    stopwords: &StopwordFilter,
) -> Vec<FrequencyEntry> {
    count_terms(
        names
            .iter()
            .flat_map(|name| stopwords.filter(tokenize(name.as_ref()))),
    )
}

/// Bigram frequencies over stopword-filtered names
pub fn bigram_frequencies<S: AsRef<str>>(
    names: &[S],
    stopwords: &StopwordFilter,
) -> Vec<FrequencyEntry> {
    count_terms(
        names
            .iter()
            .flat_map(|name| bigramize(name.as_ref(), stopwords)),
    )
}

/// Frequency of the first word of each name.
///
/// A name repeated within one level-1 category is counted once, so copies
/// of the same measure across documents do not inflate the table. Categories
/// are compared the way the summary table groups them.
pub fn first_word_frequencies<'a, I>(records: I) -> Vec<FrequencyEntry>
where
    I: IntoIterator<Item = &'a MeasureRecord>,
{
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    count_terms(
        records
            .into_iter()
            .filter(|record| seen.insert((category_of(record), record.name.as_str())))
            .filter_map(|record| tokenize(&record.name).next()),
    )
}

/// The first `n` rows of a sorted table
pub fn top_n(entries: &[FrequencyEntry], n: usize) -> &[FrequencyEntry] {
    &entries[..n.min(entries.len())]
}
