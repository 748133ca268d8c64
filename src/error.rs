//! Error types for report ingestion.
//!
//! Only structural problems surface here. Malformed numeric fields and rows
//! whose shape disagrees with the header are recovered inside the readers by
//! omitting the affected record.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading, parsing or shaping benchmark reports.
///
/// # Examples
///
/// ```
/// use izprime_bench_report::ReportError;
///
/// let err = ReportError::MissingColumn("n".to_string());
/// assert_eq!(err.to_string(), "missing required column: n");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report file does not exist or could not be read.
    #[error("cannot read report {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A pipe table declares the same column name twice.
    #[error("duplicate column '{name}' at header position {position}")]
    DuplicateColumn {
        /// Repeated column name.
        name: String,
        /// Position (0-based) of the second occurrence.
        position: usize,
    },

    /// A sieve timing report lacks its `Test Range:` header line.
    #[error("sieve timing report has no valid 'Test Range:' header")]
    MissingTestRange,

    /// Chart shaping needs a column the table does not have.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// The report kind could not be inferred from the file name.
    #[error("cannot infer report kind from {}", .0.display())]
    UnknownKind(PathBuf),

    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}
