use measure_types::{CategorySummary, FlaggedRecord, MeasureRecord};
use std::collections::BTreeMap;

/// Category label of the grand-total row
pub const ALL_CATEGORIES: &str = "All";

/// Category label used for records with a blank level-1 category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Level-1 category a record is grouped under: trimmed, blank as
/// [`UNCATEGORIZED`]
pub fn category_of(record: &MeasureRecord) -> &str {
    let category = record.category_level1.trim();
    if category.is_empty() {
        UNCATEGORIZED
    } else {
        category
    }
}

/// Per-category record counts and error sums, sorted by category name
pub fn summarize(records: &[FlaggedRecord]) -> Vec<CategorySummary> {
    let mut by_category: BTreeMap<&str, CategorySummary> = BTreeMap::new();

    for record in records {
        let category = category_of(&record.record);
        by_category
            .entry(category)
            .or_insert_with(|| CategorySummary::new(category))
            .add(&record.flags);
    }

    by_category.into_values().collect()
}

/// One summary row over every record
pub fn total_summary(records: &[FlaggedRecord]) -> CategorySummary {
    let mut total = CategorySummary::new(ALL_CATEGORIES);
    for record in records {
        total.add(&record.flags);
    }
    total
}


#[cfg(test)]
mod proptests {
    use super::*;
    use measure_types::{ErrorFlags, ErrorKind, MeasureRecord};
    use proptest::prelude::*;

    fn record(category: &str, bits: u8) -> FlaggedRecord {
        let mut flags = ErrorFlags::default();
        for (i, kind) in ErrorKind::ALL.into_iter().enumerate() {
            flags.set(kind, bits & (1 << i) != 0);
        }
        FlaggedRecord {
            record: MeasureRecord::new("id", category, "name"),
            token_count: 1,
            flags,
            lemmatizer_fallback: false,
        }
    }

    proptest! {
        /// Property: summaries are recomputed, never accumulated
        #[test]
        fn summarize_is_idempotent(rows in prop::collection::vec(("[A-C]?", 0u8..128), 0..30)) {
            let records: Vec<FlaggedRecord> =
                rows.iter().map(|(category, bits)| record(category, *bits)).collect();
            prop_assert_eq!(summarize(&records), summarize(&records));

            let per_category: u64 = summarize(&records).iter().map(|s| s.total_count).sum();
            prop_assert_eq!(per_category, records.len() as u64);
            prop_assert_eq!(total_summary(&records).total_count, records.len() as u64);
        }
    }
}
