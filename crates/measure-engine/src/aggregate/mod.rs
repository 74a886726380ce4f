//! Aggregation of flagged records into report tables
//!
//! Everything here is recomputed from its inputs on every call; there are
//! no running counters, so summarizing the same records twice gives the
//! same tables.

pub mod frequency;
pub mod length;
pub mod summary;

pub use frequency::{
    bigram_frequencies, count_terms, first_word_frequencies, top_n, word_frequencies,
};
pub use length::{length_summary, percentile, token_counts};
pub use summary::{category_of, summarize, total_summary, ALL_CATEGORIES, UNCATEGORIZED};
