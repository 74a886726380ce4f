//! Measure name audit: configuration, input loading and reporting
//!
//! Wraps [`measure_engine`] with everything a batch run needs around it:
//! a TOML [`AuditConfig`], loaders for records and reference vocabularies,
//! and an [`AuditReport`] rendered by a [`Reporter`].
//!
//! # Example
//!
//! ```no_run
//! use measure_engine::MeasureEngine;
//! use measure_report::{loader, AuditConfig, AuditReport, OutputFormat, Reporter};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AuditConfig::from_file("audit.toml")?;
//! let loaded = loader::load_records("measures.json")?;
//!
//! let mut engine = MeasureEngine::new(loader::load_term_sets(&config)?, config.engine_config())?;
//! if let Some(lemmatizer) =
//!     loader::load_lemmatizer(config.analysis.lemmatizer, config.lemma_dictionary().as_deref())?
//! {
//!     engine = engine.with_lemmatizer(lemmatizer);
//! }
//!
//! let mut evaluation = engine.evaluate(&loaded.records);
//! evaluation.diagnostics.skipped_records = loaded.skipped;
//!
//! let report = AuditReport::build(
//!     &evaluation,
//!     config.analysis.length_threshold,
//!     config.analysis.top_n,
//! );
//! Reporter::new(OutputFormat::Console).report(&report)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod report;
pub mod reporter;

pub use config::AuditConfig;
pub use error::ReportError;
pub use report::AuditReport;
pub use reporter::{OutputFormat, Reporter};
