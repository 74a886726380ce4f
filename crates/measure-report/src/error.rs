//! Error types for input loading and report rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Records input is not a JSON array or JSON Lines: {0}")]
    InvalidRecords(String),

    #[error("Invalid term list {path}: {reason}")]
    InvalidTermList { path: String, reason: String },

    #[error("Invalid synonym groups: {0}")]
    InvalidSynonyms(String),

    #[error("Unknown output format: {0} (expected console, json, json-pretty or markdown)")]
    UnknownFormat(String),
}
