use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: cannot parse {content:?} as a latency ({reason})")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("no latency samples in {0}")]
    EmptyDataset(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
