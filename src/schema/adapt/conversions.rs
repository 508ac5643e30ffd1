//! Module for converting raw arrays into the typed columns a table needs.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Date32Array, Float64Array, StringArray};
use arrow::compute::kernels::cast;
use arrow::datatypes::{DataType, Date32Type};

use crate::error::{ReportError, Result};
use crate::schema::adapt::date_utils::parse_date_string;
use crate::schema::adapt::numeric::{CoercionStats, coerce_number};
use crate::schema::adapt::types::{ColumnKind, DateFormatConfig};

/// Identifies the column being converted, for error messages
#[derive(Debug, Clone, Copy)]
pub struct ColumnRef<'a> {
    pub table: &'a str,
    pub column: &'a str,
}

/// Convert a raw array into the storage type of `kind`
///
/// Returns the converted array and, for numeric columns, the coercion tally.
pub fn convert_array(
    array: &ArrayRef,
    kind: ColumnKind,
    at: ColumnRef<'_>,
    date_config: &DateFormatConfig,
) -> Result<(ArrayRef, CoercionStats)> {
    match (array.data_type(), kind) {
        (DataType::Date32, ColumnKind::Date) | (DataType::Float64, ColumnKind::Number) => {
            Ok((array.clone(), CoercionStats::default()))
        }

        (_, ColumnKind::Date) => {
            let strings = to_string_array(array)?;
            Ok((
                convert_string_to_date32(&strings, at, date_config)?,
                CoercionStats::default(),
            ))
        }

        (_, ColumnKind::Number) => {
            let strings = to_string_array(array)?;
            let (converted, stats) = convert_string_to_float64(&strings, at)?;
            Ok((converted, stats))
        }

        (_, ColumnKind::Text) => {
            let strings = to_string_array(array)?;
            Ok((trim_strings(&strings, at)?, CoercionStats::default()))
        }
    }
}

/// Create an all-null array for an absent optional column
#[must_use]
pub fn create_null_array(kind: ColumnKind, length: usize) -> ArrayRef {
    match kind {
        ColumnKind::Date => Arc::new(Date32Array::new_null(length)),
        ColumnKind::Number => Arc::new(Float64Array::from(vec![0.0; length])),
        ColumnKind::Text => Arc::new(StringArray::new_null(length)),
    }
}

/// Storage type for a column kind
#[must_use]
pub const fn storage_type(kind: ColumnKind) -> DataType {
    match kind {
        ColumnKind::Date => DataType::Date32,
        ColumnKind::Number => DataType::Float64,
        ColumnKind::Text => DataType::Utf8,
    }
}

fn to_string_array(array: &ArrayRef) -> Result<ArrayRef> {
    if array.data_type() == &DataType::Utf8 {
        return Ok(array.clone());
    }
    Ok(cast::cast(array, &DataType::Utf8)?)
}

fn downcast<'a, T: 'static>(array: &'a ArrayRef, at: ColumnRef<'_>) -> Result<&'a T> {
    array.as_any().downcast_ref::<T>().ok_or_else(|| {
        ReportError::schema(
            at.table,
            format!(
                "column '{}' has unexpected type {:?}",
                at.column,
                array.data_type()
            ),
        )
    })
}

/// Convert a string array to a Date32 array
///
/// Dates are join keys, so a blank or unparsable cell is a hard error
/// rather than a null.
fn convert_string_to_date32(
    array: &ArrayRef,
    at: ColumnRef<'_>,
    date_config: &DateFormatConfig,
) -> Result<ArrayRef> {
    let string_array = downcast::<StringArray>(array, at)?;
    let mut builder = Date32Array::builder(string_array.len());

    for i in 0..string_array.len() {
        let raw = if string_array.is_null(i) {
            ""
        } else {
            string_array.value(i)
        };

        match parse_date_string(raw, date_config) {
            Some(date) => builder.append_value(Date32Type::from_naive_date(date)),
            None => {
                return Err(ReportError::InvalidDate {
                    table: at.table.to_string(),
                    column: at.column.to_string(),
                    row: i,
                    value: raw.to_string(),
                });
            }
        }
    }

    Ok(Arc::new(builder.finish()) as ArrayRef)
}

/// Convert a string array to Float64 with separator stripping and zero default
fn convert_string_to_float64(
    array: &ArrayRef,
    at: ColumnRef<'_>,
) -> Result<(ArrayRef, CoercionStats)> {
    let string_array = downcast::<StringArray>(array, at)?;
    let mut stats = CoercionStats::default();

    let values: Float64Array = string_array
        .iter()
        .map(|raw| {
            let outcome = coerce_number(raw);
            stats.record(outcome);
            Some(outcome.value())
        })
        .collect();

    Ok((Arc::new(values) as ArrayRef, stats))
}

/// Strip surrounding whitespace from every text cell, keeping nulls
fn trim_strings(array: &ArrayRef, at: ColumnRef<'_>) -> Result<ArrayRef> {
    let string_array = downcast::<StringArray>(array, at)?;
    let trimmed: StringArray = string_array.iter().map(|v| v.map(str::trim)).collect();
    Ok(Arc::new(trimmed) as ArrayRef)
}
