//! Console reporter for audit results
//!
//! Provides human-readable output with box-drawing tables.

use anyhow::Result;
use std::fmt::Write;

use crate::report::AuditReport;
use measure_types::{CategorySummary, ErrorKind, FrequencyEntry};

const RULE: &str = "────────────────────────────────────────────────────────────────";

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format an audit report for console output
    pub fn format(report: &AuditReport) -> Result<String> {
        let mut output = String::new();

        // Header
        writeln!(output)?;
        writeln!(output, "╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(output, "║                    MEASURE NAME AUDIT                        ║")?;
        writeln!(output, "╚══════════════════════════════════════════════════════════════╝")?;
        writeln!(output)?;

        writeln!(output, "Generated:        {}", report.generated_at)?;
        writeln!(output, "Records:          {}", report.record_count)?;
        writeln!(output, "Length threshold: {} words", report.length_threshold)?;
        writeln!(
            output,
            "Lemmatizer:       {}",
            report.diagnostics.lemmatizer.as_deref().unwrap_or("none")
        )?;
        writeln!(output)?;

        Self::format_lengths(&mut output, report)?;
        Self::format_categories(&mut output, report)?;
        Self::format_frequencies(&mut output, "Top words", &report.top_words)?;
        Self::format_frequencies(&mut output, "Top bigrams", &report.top_bigrams)?;
        Self::format_frequencies(&mut output, "Top first words", &report.top_first_words)?;
        Self::format_synonyms(&mut output, report)?;
        Self::format_flagged(&mut output, report)?;
        Self::format_diagnostics(&mut output, report)?;

        writeln!(output)?;
        Ok(output)
    }

    fn format_lengths(output: &mut String, report: &AuditReport) -> Result<()> {
        writeln!(output, "Name length (words):")?;
        match &report.length_summary {
            Some(lengths) => writeln!(
                output,
                "  Min: {:.0}, Mean: {:.1}, Median: {:.1}, Max: {:.0}",
                lengths.min, lengths.mean, lengths.median, lengths.max
            )?,
            None => writeln!(output, "  No records")?,
        }
        writeln!(output)?;
        Ok(())
    }

    fn format_categories(output: &mut String, report: &AuditReport) -> Result<()> {
        writeln!(output, "{}", RULE)?;
        writeln!(output, "Errors by category")?;
        writeln!(output, "{}", RULE)?;
        writeln!(output)?;

        writeln!(
            output,
            "  ┌──────────────────────┬───────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐"
        )?;
        write!(output, "  │ {:<20} │ {:>5} │", "Category", "Total")?;
        for kind in ErrorKind::ALL {
            write!(output, " {:>3} │", format!("E{}", kind.code()))?;
        }
        writeln!(output)?;
        writeln!(
            output,
            "  ├──────────────────────┼───────┼─────┼─────┼─────┼─────┼─────┼─────┼─────┤"
        )?;

        for summary in &report.category_summaries {
            Self::format_category_row(output, summary)?;
        }
        writeln!(
            output,
            "  ├──────────────────────┼───────┼─────┼─────┼─────┼─────┼─────┼─────┼─────┤"
        )?;
        Self::format_category_row(output, &report.total)?;
        writeln!(
            output,
            "  └──────────────────────┴───────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘"
        )?;
        writeln!(output)?;

        for kind in ErrorKind::ALL {
            writeln!(
                output,
                "  E{}  {:<24} {:>5.1}%",
                kind.code(),
                kind.label(),
                report.total.percent(kind)
            )?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn format_category_row(output: &mut String, summary: &CategorySummary) -> Result<()> {
        write!(
            output,
            "  │ {:<20} │ {:>5} │",
            truncate(&summary.category, 20),
            summary.total_count
        )?;
        for kind in ErrorKind::ALL {
            write!(output, " {:>3} │", summary.count(kind))?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn format_frequencies(
        output: &mut String,
        title: &str,
        entries: &[FrequencyEntry],
    ) -> Result<()> {
        writeln!(output, "{}:", title)?;
        if entries.is_empty() {
            writeln!(output, "  (none)")?;
        }
        for (rank, entry) in entries.iter().enumerate() {
            writeln!(output, "  {:>3}. {:<30} {:>5}", rank + 1, entry.term, entry.count)?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn format_synonyms(output: &mut String, report: &AuditReport) -> Result<()> {
        if report.attested_synonym_groups.is_empty() {
            return Ok(());
        }
        writeln!(output, "Mixed synonym groups:")?;
        for group in &report.attested_synonym_groups {
            writeln!(output, "  {}: {}", group.code, group.attested.join(" / "))?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn format_flagged(output: &mut String, report: &AuditReport) -> Result<()> {
        writeln!(output, "{}", RULE)?;
        writeln!(output, "Flagged names")?;
        writeln!(output, "{}", RULE)?;
        writeln!(output)?;

        let mut any = false;
        for flagged in report.flagged_records() {
            any = true;
            let codes: Vec<String> = flagged
                .flags
                .iter()
                .filter(|(_, raised)| *raised)
                .map(|(kind, _)| kind.code().to_string())
                .collect();
            writeln!(
                output,
                "  ✗ [{}] {} (errors {})",
                flagged.record.id,
                flagged.record.name,
                codes.join(", ")
            )?;
        }
        if !any {
            writeln!(output, "  ✓ No names flagged")?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn format_diagnostics(output: &mut String, report: &AuditReport) -> Result<()> {
        let diagnostics = &report.diagnostics;
        if diagnostics.is_clean() {
            return Ok(());
        }

        writeln!(output, "Diagnostics:")?;
        if !diagnostics.empty_term_lists.is_empty() {
            let lists: Vec<String> = diagnostics
                .empty_term_lists
                .iter()
                .map(ToString::to_string)
                .collect();
            writeln!(output, "  • Empty term lists: {}", lists.join(", "))?;
        }
        if diagnostics.malformed_terms > 0 {
            writeln!(output, "  • Unusable terms skipped: {}", diagnostics.malformed_terms)?;
        }
        if diagnostics.skipped_records > 0 {
            writeln!(output, "  • Malformed input rows skipped: {}", diagnostics.skipped_records)?;
        }
        if !diagnostics.empty_names.is_empty() {
            writeln!(
                output,
                "  • Records with empty names: {}",
                diagnostics.empty_names.join(", ")
            )?;
        }
        if diagnostics.lemmatizer_fallback > 0 {
            writeln!(
                output,
                "  • Error 6 matched raw names only for {} records (no lemmatizer)",
                diagnostics.lemmatizer_fallback
            )?;
        }
        Ok(())
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}
