//! Data model shared by the measure audit crates

pub mod flags;
pub mod terms;
pub mod types;

pub use flags::{ErrorFlags, ErrorKind};
pub use terms::{SynonymGroup, TermList, TermListKind, TermRow};
pub use types::{
    CategorySummary, Diagnostics, FlaggedRecord, FrequencyEntry, LengthSummary, MeasureRecord,
};
