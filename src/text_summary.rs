//! Text summary builder for CLI output.
//!
//! This module formats human-readable lines for text mode and for the header
//! printed before the interactive view.

use crate::model::{Histogram, LatencyReport};

/// Widest bar drawn by the text histogram.
const TEXT_BAR_WIDTH: usize = 50;

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

/// Build the statistics block: threshold, median and outliers first.
pub(crate) fn build_text_summary(report: &LatencyReport) -> TextSummary {
    let s = &report.summary;
    let mut lines = Vec::new();

    lines.push(format!("Source: {}", report.source.display()));
    lines.push(format!(
        "Samples: {} ({} timed out, {} skipped)",
        s.count, s.timeouts, s.skipped
    ));
    lines.push(format!(
        "{}th percentile threshold: {:.2} ms",
        s.percentile, s.threshold_ms
    ));
    lines.push(format!("Median latency: {} ms", s.median_ms));
    lines.push(format!("Outliers above threshold: {:?}", s.outliers_ms));
    lines.push(format!(
        "Min {} ms / mean {:.2} ms / max {} ms",
        s.min_ms, s.mean_ms, s.max_ms
    ));

    TextSummary { lines }
}

/// Render non-empty bins as `[start, end)  count  ####` rows.
pub(crate) fn build_text_histogram(histogram: &Histogram) -> TextSummary {
    let max = histogram.max_count().max(1);
    let last = histogram.bins.len().saturating_sub(1);
    let lines = histogram
        .bins
        .iter()
        .enumerate()
        .filter(|(_, b)| b.count > 0)
        .map(|(i, b)| {
            let close = if i == last { ']' } else { ')' };
            let bar_len = ((b.count as f64 / max as f64) * TEXT_BAR_WIDTH as f64).ceil() as usize;
            format!(
                "[{:>9.2}, {:>9.2}{close} {:>7}  {}",
                b.start,
                b.end,
                b.count,
                "#".repeat(bar_len)
            )
        })
        .collect();
    TextSummary { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HistogramBin, LatencySummary};
    use std::path::PathBuf;

    fn sample_report() -> LatencyReport {
        LatencyReport {
            source: PathBuf::from("results.txt"),
            title: "t".into(),
            summary: LatencySummary {
                count: 3,
                min_ms: 10,
                max_ms: 30,
                mean_ms: 20.0,
                median_ms: 20.0,
                percentile: 99.0,
                threshold_ms: 29.8,
                filtered_count: 2,
                outliers_ms: vec![30],
                timeouts: 1,
                skipped: 0,
            },
            filtered: vec![10, 20],
            histogram: Histogram::from_samples(&[10, 20], 2),
        }
    }

    #[test]
    fn test_summary_lines() {
        let lines = build_text_summary(&sample_report()).lines;
        assert!(lines.contains(&"99th percentile threshold: 29.80 ms".to_string()));
        assert!(lines.contains(&"Median latency: 20 ms".to_string()));
        assert!(lines.contains(&"Outliers above threshold: [30]".to_string()));
        assert!(lines.contains(&"Samples: 3 (1 timed out, 0 skipped)".to_string()));
    }

    #[test]
    fn test_text_histogram_skips_empty_bins() {
        let histogram = Histogram {
            bins: vec![
                HistogramBin { start: 0.0, end: 1.0, count: 4 },
                HistogramBin { start: 1.0, end: 2.0, count: 0 },
                HistogramBin { start: 2.0, end: 3.0, count: 2 },
            ],
        };
        let lines = build_text_histogram(&histogram).lines;
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(&"#".repeat(TEXT_BAR_WIDTH)));
        assert!(lines[1].contains(']'));
        assert!(lines[1].ends_with(&"#".repeat(TEXT_BAR_WIDTH / 2)));
    }
}
