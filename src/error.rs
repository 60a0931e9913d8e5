//! Error type shared by every stage of the ticket pipeline.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed ticket document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("ticket document has no \"tickets\" list")]
    MissingTickets,

    #[error("ticket #{index}: field `{field}` {reason}")]
    Parse {
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("cannot parse date-time \"{value}\": {reason}")]
    Format { value: String, reason: String },

    #[error("carrier {carrier}: negative flight time of {minutes} min")]
    NegativeDuration { carrier: String, minutes: i64 },

    #[error("failed to write report: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
