//! Core types for adapting raw text columns into typed columns.

use serde::{Deserialize, Serialize};

/// Logical type a mapped column is adapted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Calendar date, stored as `Date32`
    Date,
    /// Number coerced with default zero, stored as `Float64`
    Number,
    /// Free text or identifier, stored as `Utf8`
    Text,
}

/// Available strategies for type adaptation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptationStrategy {
    /// Column already has the target type
    AsIs,
    /// Parse date strings into calendar dates
    DateParsing,
    /// Strip separators and parse numbers, coercing failures to zero
    NumericCoercion,
    /// Convert to trimmed string representation
    StringConversion,
}

/// Configuration for date format handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormatConfig {
    /// Date-only formats, tried in order
    pub date_formats: Vec<String>,
    /// Date-time formats, tried in order; the time part is discarded
    pub datetime_formats: Vec<String>,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2025-02-10
                "%m/%d/%Y".to_string(), // US: 02/10/2025
                "%d/%m/%Y".to_string(), // UK: 10/02/2025
                "%d-%m-%Y".to_string(), // 10-02-2025
                "%Y/%m/%d".to_string(), // 2025/02/10
                "%d.%m.%Y".to_string(), // 10.02.2025
                "%Y%m%d".to_string(),   // Compact: 20250210
                "%d %b %Y".to_string(), // 10 Feb 2025
                "%d %B %Y".to_string(), // 10 February 2025
            ],
            datetime_formats: vec![
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%d %H:%M:%S%.f".to_string(),
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S%.f".to_string(),
                "%Y-%m-%d %H:%M".to_string(),
                "%m/%d/%Y %H:%M:%S".to_string(),
                "%m/%d/%Y %H:%M".to_string(),
            ],
            enable_format_detection: true,
        }
    }
}
