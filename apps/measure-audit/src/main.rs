//! Measure Audit Binary
//!
//! Flags measure names that break naming best practices and prints
//! per-category error counts and word statistics.

use anyhow::Context;
use clap::Parser;
use measure_engine::{LemmatizerKind, MeasureEngine};
use measure_report::{loader, AuditConfig, AuditReport, OutputFormat, Reporter};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "measure-audit")]
#[command(
    version,
    about = "Check efficiency measure names against naming best practices"
)]
struct Args {
    /// Records to audit: a JSON array or JSON Lines
    #[arg(short, long)]
    records: PathBuf,

    /// TOML file naming the term lists and analysis settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format: console, json, json-pretty or markdown
    #[arg(short, long, default_value = "console")]
    format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Word count above which a name is flagged as too long
    #[arg(long)]
    threshold: Option<usize>,

    /// Rows kept in each frequency table
    #[arg(long)]
    top: Option<usize>,

    /// Lemmatizer: plural, stemmer or none
    #[arg(long)]
    lemmatizer: Option<LemmatizerKind>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the report
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(&args)?;
    tracing::info!(
        records = %args.records.display(),
        threshold = config.analysis.length_threshold,
        lemmatizer = %config.analysis.lemmatizer,
        "Starting measure audit v{}",
        env!("CARGO_PKG_VERSION")
    );

    let report = run(&config, &args.records)?;

    let reporter = Reporter::new(args.format);
    match &args.output {
        Some(path) => {
            reporter
                .write_to_file(&report, path)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            tracing::info!(path = %path.display(), format = %args.format, "report written");
        }
        None => reporter.report(&report)?,
    }

    Ok(())
}

/// Config file (or defaults) with command-line overrides applied
fn load_config(args: &Args) -> anyhow::Result<AuditConfig> {
    let mut config = match &args.config {
        Some(path) => AuditConfig::from_file(path)?,
        None => {
            tracing::warn!("no config file given; every term list is empty");
            AuditConfig::default()
        }
    };

    if let Some(threshold) = args.threshold {
        config.analysis.length_threshold = threshold;
    }
    if let Some(top) = args.top {
        config.analysis.top_n = top;
    }
    if let Some(lemmatizer) = args.lemmatizer {
        config.analysis.lemmatizer = lemmatizer;
    }
    Ok(config)
}

fn run(config: &AuditConfig, records: &Path) -> anyhow::Result<AuditReport> {
    let loaded = loader::load_records(records)?;
    let terms = loader::load_term_sets(config)?;

    let mut engine = MeasureEngine::new(terms, config.engine_config())
        .context("Invalid analysis configuration")?;
    let lemmatizer = loader::load_lemmatizer(
        config.analysis.lemmatizer,
        config.lemma_dictionary().as_deref(),
    )?;
    if let Some(lemmatizer) = lemmatizer {
        engine = engine.with_lemmatizer(lemmatizer);
    }

    let mut evaluation = engine.evaluate(&loaded.records);
    evaluation.diagnostics.skipped_records = loaded.skipped;
    if loaded.skipped > 0 {
        tracing::warn!(count = loaded.skipped, "malformed input rows skipped");
    }

    Ok(AuditReport::build(
        &evaluation,
        config.analysis.length_threshold,
        config.analysis.top_n,
    ))
}
