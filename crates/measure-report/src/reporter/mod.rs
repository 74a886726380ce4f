//! Audit report rendering
//!
//! # Output Formats
//!
//! - **JSON**: Machine-readable flag table and statistics
//! - **Console**: Human-readable tables for a terminal
//! - **Markdown**: Documentation-friendly format for reports
//!
//! # Example
//!
//! ```no_run
//! use measure_report::reporter::{OutputFormat, Reporter};
//! use measure_report::AuditReport;
//!
//! # fn example(report: AuditReport) -> anyhow::Result<()> {
//! Reporter::new(OutputFormat::Console).report(&report)?;
//!
//! // Or write to a file
//! Reporter::new(OutputFormat::JsonPretty).write_to_file(&report, "audit.json")?;
//! # Ok(())
//! # }
//! ```

mod console;
mod json;
mod markdown;

use anyhow::Result;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::ReportError;
use crate::report::AuditReport;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;

/// Output format for audit reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format for machine parsing
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Console output with box-drawing tables
    #[default]
    Console,
    /// Markdown format for documentation
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "json-pretty" | "pretty" => Ok(OutputFormat::JsonPretty),
            "console" | "text" => Ok(OutputFormat::Console),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::JsonPretty => "json-pretty",
            OutputFormat::Console => "console",
            OutputFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

/// Reporter for audit results
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report to stdout
    pub fn report(&self, report: &AuditReport) -> Result<()> {
        let output = self.format_report(report)?;
        print!("{}", output);
        io::stdout().flush()?;
        Ok(())
    }

    /// Write the report to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, report: &AuditReport, path: P) -> Result<()> {
        let output = self.format_report(report)?;
        fs::write(path, output)?;
        Ok(())
    }

    /// Format the report as a string
    pub fn format_report(&self, report: &AuditReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => JsonReporter::format(report, false),
            OutputFormat::JsonPretty => JsonReporter::format(report, true),
            OutputFormat::Console => ConsoleReporter::format(report),
            OutputFormat::Markdown => MarkdownReporter::format(report),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
