//! Error types shared by the transform pipelines.

use thiserror::Error;

/// Errors that can occur while building or serializing a domain event.
///
/// Shape-level mismatches (wrong table, unknown operation code, non-object
/// key/value) are not errors; they resolve to a pass-through outcome
/// instead. Everything here aborts the record being processed.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("row image is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("column '{column}' is not a {expected}: {value}")]
    ColumnType {
        column: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("invalid URL in column '{column}': {message}")]
    InvalidUrl {
        column: &'static str,
        message: String,
    },

    #[error("unrecognized status value '{0}'")]
    UnknownStatus(String),

    #[error("record is missing the '{0}' row image")]
    MissingImage(&'static str),

    #[error("failed to serialize event: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
