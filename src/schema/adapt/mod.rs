//! Module for adapting raw CSV text columns into typed table columns.

pub mod compatibility;
pub mod conversions;
pub mod date_utils;
pub mod numeric;
pub mod schema_compat;
pub mod types;

pub use compatibility::determine_adaptation_strategy;
pub use conversions::{ColumnRef, convert_array, create_null_array, storage_type};
pub use date_utils::{detect_date_format, parse_date_string};
pub use numeric::{CoercionStats, Coerced, coerce_number};
pub use schema_compat::{
    ColumnAdaptation, TableCompatibilityReport, adapt_record_batch, check_table_schema,
};
pub use types::{AdaptationStrategy, ColumnKind, DateFormatConfig};
