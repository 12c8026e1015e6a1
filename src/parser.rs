//! Results-file parsing.
//!
//! A results file starts with two header lines, followed by one line per
//! request: either a timeout marker (`R...`) or a latency such as `142ms`.

use crate::error::ReportError;
use crate::model::{MalformedPolicy, ParsedData, Record};

/// Leading lines that carry experiment labels rather than samples.
pub const HEADER_LINE_COUNT: usize = 2;

/// First character of a line recording a timed-out request.
pub const TIMEOUT_SENTINEL: char = 'R';

/// Classify one data line. `line` is the 1-based line number used in errors.
pub fn parse_record(raw: &str, line: usize) -> Result<Record, ReportError> {
    // Checked on the raw line: indentation means it is not a marker.
    if raw.starts_with(TIMEOUT_SENTINEL) {
        return Ok(Record::Timeout);
    }

    let trimmed = raw.trim();
    let fail = |reason: String| ReportError::Parse {
        line,
        content: trimmed.to_string(),
        reason,
    };

    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, unit) = trimmed.split_at(split);
    if digits.is_empty() {
        return Err(fail("missing numeric value".into()));
    }

    let value: u64 = digits
        .parse()
        .map_err(|e: std::num::ParseIntError| fail(e.to_string()))?;
    let scale = match unit {
        "ms" => 1,
        "s" => 1000,
        "" => return Err(fail("missing unit suffix".into())),
        other => return Err(fail(format!("unknown unit {other:?}"))),
    };

    value
        .checked_mul(scale)
        .map(Record::Latency)
        .ok_or_else(|| fail("value out of range".into()))
}

/// Parse every line after the header into a dataset.
pub fn parse_lines<'a, I>(lines: I, policy: MalformedPolicy) -> Result<ParsedData, ReportError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut data = ParsedData::default();

    for (idx, raw) in lines.into_iter().enumerate().skip(HEADER_LINE_COUNT) {
        let line = idx + 1;
        match parse_record(raw, line) {
            Ok(Record::Latency(ms)) => data.samples.push(ms),
            Ok(Record::Timeout) => {
                tracing::warn!(line, "timed out request in data");
                data.timeouts.push(line);
            }
            Err(e) if policy == MalformedPolicy::Skip => {
                tracing::warn!(line, error = %e, "skipping malformed line");
                data.skipped.push(line);
            }
            Err(e) => return Err(e),
        }
    }

    tracing::debug!(
        samples = data.samples.len(),
        timeouts = data.timeouts.len(),
        skipped = data.skipped.len(),
        "parsed results"
    );
    Ok(data)
}
