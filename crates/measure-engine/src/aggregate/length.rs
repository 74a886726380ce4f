//! Name length distribution

use crate::tokenizer::whitespace_token_count;
use measure_types::{FlaggedRecord, LengthSummary};

/// Percentile of `samples` with linear interpolation between nearest ranks.
///
/// Returns `None` for an empty slice or `p` outside `0.0..=100.0`.
pub fn percentile(samples: &[f64], p: f64) -> Option<f64> {
    if samples.is_empty() || !(0.0..=100.0).contains(&p) {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        Some(sorted[lower])
    } else {
        let fraction = rank - lower as f64;
        Some(sorted[lower] + fraction * (sorted[upper] - sorted[lower]))
    }
}

/// Whitespace token count of every record, in input order (histogram input)
pub fn token_counts(records: &[FlaggedRecord]) -> Vec<usize> {
    records
        .iter()
        .map(|r| whitespace_token_count(&r.record.name))
        .collect()
}

/// Min, mean, median and max of per-name token counts
pub fn length_summary(counts: &[usize]) -> Option<LengthSummary> {
    if counts.is_empty() {
        return None;
    }
    let samples: Vec<f64> = counts.iter().map(|&c| c as f64).collect();

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    let median = percentile(&samples, 50.0)?;

    Some(LengthSummary {
        count: samples.len(),
        min,
        mean,
        median,
        max,
    })
}
