use crate::model::{
    LatencyReport, MalformedPolicy, ReportConfig, DEFAULT_BINS, DEFAULT_PERCENTILE,
};
use crate::text_summary::{build_text_histogram, build_text_summary, TextSummary};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "latency-histogram",
    version,
    about = "Summarize a replica latency results file and show its distribution"
)]
pub struct Cli {
    /// Results file: two header lines, then one latency (e.g. `142ms`) or
    /// timeout marker (`R...`) per line
    pub input: PathBuf,

    /// Percentile used as the outlier threshold
    #[arg(long, default_value_t = DEFAULT_PERCENTILE)]
    pub percentile: f64,

    /// Number of histogram bins
    #[arg(long, default_value_t = DEFAULT_BINS)]
    pub bins: usize,

    /// Histogram title
    #[arg(long)]
    pub title: Option<String>,

    /// What to do with a line that is not a latency or timeout marker
    #[arg(long, value_enum, default_value_t = MalformedPolicy::Abort)]
    pub on_malformed: MalformedPolicy,

    /// Print the summary and a text histogram and exit (no TUI)
    #[arg(long)]
    pub text: bool,

    /// Print the report as JSON and exit (no TUI)
    #[arg(long, conflicts_with = "text")]
    pub json: bool,
}

/// Build a `ReportConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> ReportConfig {
    let title = args.title.clone().unwrap_or_else(|| {
        format!(
            "Latency Distribution (within {}th percentile)",
            args.percentile
        )
    });
    ReportConfig {
        percentile: args.percentile,
        bins: args.bins,
        on_malformed: args.on_malformed,
        title,
        ..ReportConfig::new(args.input.clone())
    }
}

pub fn run(args: Cli) -> Result<()> {
    let cfg = build_config(&args);
    let report = crate::report::build_report(&cfg)
        .with_context(|| format!("failed to analyse {}", cfg.input.display()))?;

    if args.json {
        let out = serde_json::to_string_pretty(&report)?;
        return write_lines(std::iter::once(out));
    }

    write_lines(build_text_summary(&report).lines)?;

    if args.text {
        return write_text_histogram(&report);
    }

    #[cfg(feature = "tui")]
    {
        crate::tui::run(&report)
    }
    #[cfg(not(feature = "tui"))]
    {
        // Fallback when built without TUI support.
        write_text_histogram(&report)
    }
}

fn write_text_histogram(report: &LatencyReport) -> Result<()> {
    let TextSummary { lines } = build_text_histogram(&report.histogram);
    write_lines(std::iter::once(String::new()).chain(lines))
}

fn write_lines<I>(lines: I) -> Result<()>
where
    I: IntoIterator<Item = String>,
{
    let stdout = std::io::stdout();
    let mut out = std::io::LineWriter::new(stdout.lock());
    for line in lines {
        writeln!(out, "{}", line).context("write to stdout")?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}
