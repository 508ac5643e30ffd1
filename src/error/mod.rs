//! Error handling for report loading and computation.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use chrono::NaiveDate;

/// Specialized error type for the report pipeline
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// An input file could not be found or opened
    #[error("IO error for {}: {context}", .path.display())]
    File {
        path: PathBuf,
        context: String,
        #[source]
        source: Option<io::Error>,
    },

    /// Error raised while reading or building Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// A required column is absent from an input table
    #[error("Missing required column '{column}' in {table} table")]
    MissingColumn { table: String, column: String },

    /// A column exists but holds data of the wrong shape
    #[error("Schema error in {table} table: {message}")]
    Schema { table: String, message: String },

    /// A date cell could not be interpreted as a calendar date
    #[error("Invalid date '{value}' in column '{column}' of {table} table at row {row}")]
    InvalidDate {
        table: String,
        column: String,
        row: usize,
        value: String,
    },

    /// More than one inbound record lands on the same total-series date
    #[error("Ambiguous join: {candidates} inbound records map to total date {date}")]
    AmbiguousJoin { date: NaiveDate, candidates: usize },

    /// A lag pushed a date outside the representable calendar range
    #[error("Date {date} cannot be shifted by {lag_days} days")]
    DateOutOfRange { date: NaiveDate, lag_days: i64 },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure converting derived records to Arrow
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_arrow::Error),
}

impl ReportError {
    /// Create a file error with context and no underlying IO error
    pub fn file(path: impl Into<PathBuf>, context: impl Into<String>) -> Self {
        Self::File {
            path: path.into(),
            context: context.into(),
            source: None,
        }
    }

    /// Create a file error wrapping an IO error
    pub fn file_with_source(
        path: impl Into<PathBuf>,
        context: impl Into<String>,
        source: io::Error,
    ) -> Self {
        Self::File {
            path: path.into(),
            context: context.into(),
            source: Some(source),
        }
    }

    pub fn missing_column(table: &str, column: &str) -> Self {
        Self::MissingColumn {
            table: table.to_string(),
            column: column.to_string(),
        }
    }

    pub fn schema(table: &str, message: impl Into<String>) -> Self {
        Self::Schema {
            table: table.to_string(),
            message: message.into(),
        }
    }
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
