//! Module for deciding how a source column reaches its target kind.

use arrow::datatypes::DataType;

use crate::schema::adapt::types::{AdaptationStrategy, ColumnKind};

/// Determine the adaptation strategy for a source type and target kind
#[must_use]
pub fn determine_adaptation_strategy(from: &DataType, to: ColumnKind) -> AdaptationStrategy {
    match (from, to) {
        (DataType::Date32, ColumnKind::Date) | (DataType::Float64, ColumnKind::Number) => {
            AdaptationStrategy::AsIs
        }
        (_, ColumnKind::Number) => AdaptationStrategy::NumericCoercion,
        (_, ColumnKind::Date) => AdaptationStrategy::DateParsing,
        (_, ColumnKind::Text) => AdaptationStrategy::StringConversion,
    }
}
