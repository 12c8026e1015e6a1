use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_PERCENTILE: f64 = 99.0;
pub const DEFAULT_BINS: usize = 100;
pub const DEFAULT_TITLE: &str = "Latency Distribution (within 99th percentile)";

/// What to do with a data line that is neither a timeout marker nor a latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail the whole run on the first malformed line
    #[default]
    Abort,
    /// Log a warning, remember the line number and keep going
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub percentile: f64,
    pub bins: usize,
    pub on_malformed: MalformedPolicy,
    pub title: String,
}

impl ReportConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            percentile: DEFAULT_PERCENTILE,
            bins: DEFAULT_BINS,
            on_malformed: MalformedPolicy::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// One classified data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    Timeout,
    Latency(u64),
}

/// Samples in file order plus the 1-based line numbers that did not yield one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedData {
    pub samples: Vec<u64>,
    pub timeouts: Vec<usize>,
    pub skipped: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencySummary {
    pub count: usize,
    pub min_ms: u64,
    pub max_ms: u64,
    pub mean_ms: f64,
    pub median_ms: f64,
    pub percentile: f64,
    pub threshold_ms: f64,
    pub filtered_count: usize,
    pub outliers_ms: Vec<u64>,
    pub timeouts: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyReport {
    pub source: PathBuf,
    pub title: String,
    pub summary: LatencySummary,
    #[serde(skip)]
    pub filtered: Vec<u64>,
    pub histogram: Histogram,
}
