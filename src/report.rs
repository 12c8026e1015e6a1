//! End-to-end reporting: results file in, [`LatencyReport`] out.

use crate::error::ReportError;
use crate::model::{Histogram, LatencyReport, LatencySummary, ParsedData, ReportConfig};
use crate::{parser, stats};
use std::path::Path;

/// Read, parse and summarise the file named by `cfg.input`.
pub fn build_report(cfg: &ReportConfig) -> Result<LatencyReport, ReportError> {
    validate(cfg)?;
    let contents = read_results(&cfg.input)?;
    let data = parser::parse_lines(contents.lines(), cfg.on_malformed)?;
    summarize(cfg, data)
}

fn validate(cfg: &ReportConfig) -> Result<(), ReportError> {
    if !(cfg.percentile > 0.0 && cfg.percentile <= 100.0) {
        return Err(ReportError::InvalidConfig(format!(
            "percentile must be in (0, 100], got {}",
            cfg.percentile
        )));
    }
    if cfg.bins == 0 {
        return Err(ReportError::InvalidConfig(
            "bin count must be at least 1".into(),
        ));
    }
    Ok(())
}

fn read_results(path: &Path) -> Result<String, ReportError> {
    std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Derive the threshold, outliers and histogram from a parsed dataset.
pub fn summarize(cfg: &ReportConfig, data: ParsedData) -> Result<LatencyReport, ReportError> {
    let empty = || ReportError::EmptyDataset(cfg.input.clone());
    let threshold = stats::percentile(&data.samples, cfg.percentile).ok_or_else(empty)?;
    let median = stats::median(&data.samples).ok_or_else(empty)?;
    let mean = stats::mean(&data.samples).ok_or_else(empty)?;
    let (min, max) = match (data.samples.iter().min(), data.samples.iter().max()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return Err(empty()),
    };

    let (filtered, outliers) = stats::partition_at(&data.samples, threshold);
    let histogram = Histogram::from_samples(&filtered, cfg.bins);
    tracing::debug!(
        threshold,
        kept = filtered.len(),
        binned = histogram.total(),
        outliers = outliers.len(),
        "partitioned samples"
    );

    Ok(LatencyReport {
        source: cfg.input.clone(),
        title: cfg.title.clone(),
        summary: LatencySummary {
            count: data.samples.len(),
            min_ms: min,
            max_ms: max,
            mean_ms: mean,
            median_ms: median,
            percentile: cfg.percentile,
            threshold_ms: threshold,
            filtered_count: filtered.len(),
            outliers_ms: outliers,
            timeouts: data.timeouts.len(),
            skipped: data.skipped.len(),
        },
        filtered,
        histogram,
    })
}
