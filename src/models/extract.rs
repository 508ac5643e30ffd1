//! Typed column access on canonical record batches.

use arrow::array::{Array, Date32Array, Float64Array, StringArray};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;

use crate::error::{ReportError, Result};

fn column<'a, T: 'static>(batch: &'a RecordBatch, table: &str, name: &str) -> Result<&'a T> {
    let array = batch
        .column_by_name(name)
        .ok_or_else(|| ReportError::missing_column(table, name))?;
    array.as_any().downcast_ref::<T>().ok_or_else(|| {
        ReportError::schema(
            table,
            format!("column '{name}' has type {:?}", array.data_type()),
        )
    })
}

pub fn date_column<'a>(batch: &'a RecordBatch, table: &str, name: &str) -> Result<&'a Date32Array> {
    column::<Date32Array>(batch, table, name)
}

pub fn number_column<'a>(
    batch: &'a RecordBatch,
    table: &str,
    name: &str,
) -> Result<&'a Float64Array> {
    column::<Float64Array>(batch, table, name)
}

pub fn text_column<'a>(batch: &'a RecordBatch, table: &str, name: &str) -> Result<&'a StringArray> {
    column::<StringArray>(batch, table, name)
}

/// Text column that may be absent from the batch
pub fn optional_text_column<'a>(
    batch: &'a RecordBatch,
    table: &str,
    name: &str,
) -> Result<Option<&'a StringArray>> {
    if batch.column_by_name(name).is_none() {
        return Ok(None);
    }
    text_column(batch, table, name).map(Some)
}

pub fn date_at(array: &Date32Array, row: usize, table: &str, name: &str) -> Result<NaiveDate> {
    if array.is_null(row) {
        return Err(ReportError::InvalidDate {
            table: table.to_string(),
            column: name.to_string(),
            row,
            value: String::new(),
        });
    }
    array.value_as_date(row).ok_or_else(|| ReportError::InvalidDate {
        table: table.to_string(),
        column: name.to_string(),
        row,
        value: array.value(row).to_string(),
    })
}

/// Numeric cell; nulls count as zero
#[must_use]
pub fn number_at(array: &Float64Array, row: usize) -> f64 {
    if array.is_null(row) { 0.0 } else { array.value(row) }
}

/// Text cell; nulls become the empty string
#[must_use]
pub fn text_at(array: &StringArray, row: usize) -> String {
    if array.is_null(row) {
        String::new()
    } else {
        array.value(row).to_string()
    }
}

/// Text cell; nulls and blanks become `None`
#[must_use]
pub fn optional_text_at(array: &StringArray, row: usize) -> Option<String> {
    if array.is_null(row) {
        return None;
    }
    let value = array.value(row).trim();
    (!value.is_empty()).then(|| value.to_string())
}
