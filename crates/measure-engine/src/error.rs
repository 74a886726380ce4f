use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown lemmatizer: {0}")]
    UnknownLemmatizer(String),

    #[error("Invalid lemma dictionary line {line}: {content}")]
    InvalidDictionary { line: usize, content: String },
}
