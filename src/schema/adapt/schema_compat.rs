//! Module for checking a source batch against a table definition and
//! adapting it into canonical, typed columns.

use arrow::array::ArrayRef;
use arrow::datatypes::{DataType, Schema};
use arrow::record_batch::RecordBatch;
use log::{debug, warn};

use crate::error::{ReportError, Result};
use crate::schema::adapt::compatibility::determine_adaptation_strategy;
use crate::schema::adapt::conversions::{ColumnRef, convert_array, create_null_array};
use crate::schema::adapt::types::{AdaptationStrategy, DateFormatConfig};
use crate::schema::table::TableSchema;

/// Result of matching a source schema against a table definition
#[derive(Debug)]
pub struct TableCompatibilityReport {
    /// Whether every required column is present
    pub compatible: bool,
    /// Required source headers that were not found
    pub missing_required: Vec<String>,
    /// Optional source headers that were not found
    pub missing_optional: Vec<String>,
    /// Adaptations that will be performed
    pub adaptations: Vec<ColumnAdaptation>,
}

/// A column adaptation to be performed
#[derive(Debug)]
pub struct ColumnAdaptation {
    pub source_name: String,
    pub canonical_name: &'static str,
    pub source_type: DataType,
    pub strategy: AdaptationStrategy,
}

/// Check which mapped columns exist in the source and how they will adapt
#[must_use]
pub fn check_table_schema(source: &Schema, table: &TableSchema) -> TableCompatibilityReport {
    let mut missing_required = Vec::new();
    let mut missing_optional = Vec::new();
    let mut adaptations = Vec::new();

    for spec in &table.columns {
        match source.field_with_name(&spec.source) {
            Ok(field) => adaptations.push(ColumnAdaptation {
                source_name: spec.source.clone(),
                canonical_name: spec.canonical,
                source_type: field.data_type().clone(),
                strategy: determine_adaptation_strategy(field.data_type(), spec.kind),
            }),
            Err(_) if spec.required => missing_required.push(spec.source.clone()),
            Err(_) => missing_optional.push(spec.source.clone()),
        }
    }

    TableCompatibilityReport {
        compatible: missing_required.is_empty(),
        missing_required,
        missing_optional,
        adaptations,
    }
}

/// Convert a raw batch into the canonical schema of `table`
///
/// Fails on the first missing required column, naming it. Numeric columns
/// are coerced with zero default and the number of defaulted cells is
/// logged per column.
pub fn adapt_record_batch(
    batch: &RecordBatch,
    table: &TableSchema,
    date_config: &DateFormatConfig,
) -> Result<RecordBatch> {
    let report = check_table_schema(&batch.schema(), table);
    if let Some(missing) = report.missing_required.first() {
        return Err(ReportError::missing_column(table.table, missing));
    }
    for missing in &report.missing_optional {
        debug!("Optional column '{missing}' absent from {} table", table.table);
    }
    for adaptation in &report.adaptations {
        debug!(
            "{} table: '{}' ({:?}) -> '{}' via {:?}",
            table.table,
            adaptation.source_name,
            adaptation.source_type,
            adaptation.canonical_name,
            adaptation.strategy
        );
    }

    let source_schema = batch.schema();
    let mut adapted_columns: Vec<ArrayRef> = Vec::with_capacity(table.columns.len());

    for spec in &table.columns {
        let Ok(source_idx) = source_schema.index_of(&spec.source) else {
            adapted_columns.push(create_null_array(spec.kind, batch.num_rows()));
            continue;
        };

        let at = ColumnRef {
            table: table.table,
            column: &spec.source,
        };
        let (converted, stats) = convert_array(batch.column(source_idx), spec.kind, at, date_config)?;
        if stats.defaulted() > 0 {
            warn!(
                "{} table: coerced {} cell(s) of '{}' to 0 ({} missing, {} unparsable)",
                table.table,
                stats.defaulted(),
                spec.source,
                stats.missing,
                stats.unparsable
            );
        }
        adapted_columns.push(converted);
    }

    Ok(RecordBatch::try_new(table.canonical_schema(), adapted_columns)?)
}
