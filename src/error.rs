use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while turning a report file into a
/// comparison bundle.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("malformed report {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("record {index} has no '{field}' field")]
    MissingField { field: String, index: usize },

    #[error("record {index}: '{field}' is not a number")]
    TypeMismatch { field: String, index: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unsupported report type '{0}' (expected edge_report, stretch_report, density_report or stretch_density_report)")]
    UnsupportedReportKind(String),

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rendering '{output_id}': {reason}")]
    Render { output_id: String, reason: String },
}

impl ReportError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ReportError::Malformed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn missing(field: &str, index: usize) -> Self {
        ReportError::MissingField {
            field: field.to_string(),
            index,
        }
    }

    pub(crate) fn mismatch(field: &str, index: usize) -> Self {
        ReportError::TypeMismatch {
            field: field.to_string(),
            index,
        }
    }
}
