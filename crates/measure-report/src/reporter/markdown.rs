//! Markdown reporter for audit results

use anyhow::Result;
use std::fmt::Write;

use crate::report::AuditReport;
use measure_types::{CategorySummary, ErrorKind, FrequencyEntry};

/// Markdown format reporter
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Format an audit report as a Markdown document
    pub fn format(report: &AuditReport) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# Measure Name Audit")?;
        writeln!(output)?;
        writeln!(output, "- **Generated:** {}", report.generated_at)?;
        writeln!(output, "- **Records:** {}", report.record_count)?;
        writeln!(
            output,
            "- **Length threshold:** {} words",
            report.length_threshold
        )?;
        writeln!(
            output,
            "- **Lemmatizer:** {}",
            report.diagnostics.lemmatizer.as_deref().unwrap_or("none")
        )?;
        if let Some(lengths) = &report.length_summary {
            writeln!(
                output,
                "- **Name length:** min {:.0}, mean {:.1}, median {:.1}, max {:.0}",
                lengths.min, lengths.mean, lengths.median, lengths.max
            )?;
        }
        writeln!(output)?;

        writeln!(output, "## Errors by Category")?;
        writeln!(output)?;
        write!(output, "| Category | Total |")?;
        for kind in ErrorKind::ALL {
            write!(output, " Error {} |", kind.code())?;
        }
        writeln!(output)?;
        write!(output, "|----------|------:|")?;
        for _ in ErrorKind::ALL {
            write!(output, "--------:|")?;
        }
        writeln!(output)?;
        for summary in &report.category_summaries {
            Self::format_category_row(&mut output, summary, false)?;
        }
        Self::format_category_row(&mut output, &report.total, true)?;
        writeln!(output)?;

        writeln!(output, "| Code | Rule | Share of records |")?;
        writeln!(output, "|-----:|------|-----------------:|")?;
        for kind in ErrorKind::ALL {
            writeln!(
                output,
                "| {} | {} | {:.1}% |",
                kind.code(),
                kind.label(),
                report.total.percent(kind)
            )?;
        }
        writeln!(output)?;

        Self::format_frequencies(&mut output, "Top Words", &report.top_words)?;
        Self::format_frequencies(&mut output, "Top Bigrams", &report.top_bigrams)?;
        Self::format_frequencies(&mut output, "Top First Words", &report.top_first_words)?;

        if !report.attested_synonym_groups.is_empty() {
            writeln!(output, "## Mixed Synonym Groups")?;
            writeln!(output)?;
            for group in &report.attested_synonym_groups {
                writeln!(
                    output,
                    "- **{}**: {}",
                    group.code,
                    group.attested.join(", ")
                )?;
            }
            writeln!(output)?;
        }

        writeln!(output, "## Flagged Names")?;
        writeln!(output)?;
        writeln!(output, "| Id | Category | Name | Errors |")?;
        writeln!(output, "|----|----------|------|--------|")?;
        for flagged in report.flagged_records() {
            let codes: Vec<String> = flagged
                .flags
                .iter()
                .filter(|(_, raised)| *raised)
                .map(|(kind, _)| kind.code().to_string())
                .collect();
            writeln!(
                output,
                "| {} | {} | {} | {} |",
                escape(&flagged.record.id),
                escape(&flagged.record.category_level1),
                escape(&flagged.record.name),
                codes.join(", ")
            )?;
        }

        let diagnostics = &report.diagnostics;
        if !diagnostics.is_clean() {
            writeln!(output)?;
            writeln!(output, "## Diagnostics")?;
            writeln!(output)?;
            for kind in &diagnostics.empty_term_lists {
                writeln!(output, "- {} term list is empty", kind)?;
            }
            if diagnostics.malformed_terms > 0 {
                writeln!(
                    output,
                    "- {} unusable terms skipped",
                    diagnostics.malformed_terms
                )?;
            }
            if diagnostics.skipped_records > 0 {
                writeln!(
                    output,
                    "- {} malformed input rows skipped",
                    diagnostics.skipped_records
                )?;
            }
            if !diagnostics.empty_names.is_empty() {
                writeln!(
                    output,
                    "- Records with empty names: {}",
                    diagnostics.empty_names.join(", ")
                )?;
            }
            if diagnostics.lemmatizer_fallback > 0 {
                writeln!(
                    output,
                    "- Error 6 matched raw names only for {} records",
                    diagnostics.lemmatizer_fallback
                )?;
            }
        }

        Ok(output)
    }

    fn format_category_row(
        output: &mut String,
        summary: &CategorySummary,
        bold: bool,
    ) -> Result<()> {
        if bold {
            write!(
                output,
                "| **{}** | **{}** |",
                escape(&summary.category),
                summary.total_count
            )?;
        } else {
            write!(
                output,
                "| {} | {} |",
                escape(&summary.category),
                summary.total_count
            )?;
        }
        for kind in ErrorKind::ALL {
            write!(output, " {} |", summary.count(kind))?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn format_frequencies(
        output: &mut String,
        title: &str,
        entries: &[FrequencyEntry],
    ) -> Result<()> {
        writeln!(output, "## {}", title)?;
        writeln!(output)?;
        writeln!(output, "| Term | Count |")?;
        writeln!(output, "|------|------:|")?;
        for entry in entries {
            writeln!(output, "| {} | {} |", escape(&entry.term), entry.count)?;
        }
        writeln!(output)?;
        Ok(())
    }
}

/// Keep pipes in free text from breaking table rows
fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;

    #[test]
    fn test_markdown_tables() {
        let output = MarkdownReporter::format(&sample_report()).unwrap();

        assert!(output.starts_with("# Measure Name Audit"));
        assert!(output.contains("| Category | Total | Error 1 | Error 3 |"));
        assert!(output.contains("| **All** | **5** |"));
        assert!(output.contains("| Lighting | 2 |"));
        assert!(output.contains("| lamps | 2 |"));
        assert!(output.contains("- **S01**: led, light emitting diode"));
    }

    #[test]
    fn test_markdown_flagged_rows() {
        let output = MarkdownReporter::format(&sample_report()).unwrap();
        assert!(output.contains("| 5 | HVAC | Improve comfort | 5, 6, 7 |"));
        assert!(!output.contains("## Diagnostics"));
    }

    #[test]
    fn test_escape_pipes() {
        assert_eq!(escape("and|or"), "and\\|or");
    }
}
