//! CSV file loading utilities

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::compute::concat_batches;
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use log::{debug, info};

use crate::config::ReportConfig;
use crate::error::util::{require_files, safe_read_to_string};
use crate::error::{ReportError, Result};
use crate::models::{InboundRecord, PolicyTable, TableRecord, TotalRecord};
use crate::schema::{DateFormatConfig, TableSchema, adapt_record_batch};

/// Read a CSV file into a single record batch of text columns
///
/// Every column is read as `Utf8`; typing happens afterwards against the
/// table definition so that coercion rules stay in one place. Header names
/// are trimmed of surrounding whitespace and a leading byte-order mark.
pub fn read_csv(path: &Path, purpose: &str) -> Result<RecordBatch> {
    let content = safe_read_to_string(path, purpose)?;
    let batch = parse_csv(&content).map_err(|e| match e {
        ReportError::Arrow(e) => ReportError::file(path, format!("Malformed CSV ({purpose}): {e}")),
        other => other,
    })?;
    debug!(
        "Read {} rows x {} columns from {}",
        batch.num_rows(),
        batch.num_columns(),
        path.display()
    );
    Ok(batch)
}

/// Parse CSV text with a header row into a batch of text columns
///
/// Rows with fewer fields than the header are padded with nulls.
pub fn parse_csv(content: &str) -> Result<RecordBatch> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let bytes = content.as_bytes();

    let (inferred, _) = Format::default()
        .with_header(true)
        .infer_schema(Cursor::new(bytes), Some(0))?;
    if inferred.fields().is_empty() {
        return Err(ReportError::Arrow(ArrowError::CsvError(
            "no header row".to_string(),
        )));
    }

    let fields: Vec<Field> = inferred
        .fields()
        .iter()
        .map(|f| Field::new(f.name().trim(), DataType::Utf8, true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_truncated_rows(true)
        .build(Cursor::new(bytes))?;
    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;

    Ok(concat_batches(&schema, &batches)?)
}

/// Read a CSV file and adapt it to a table definition
pub fn load_table(
    path: &Path,
    table: &TableSchema,
    date_config: &DateFormatConfig,
) -> Result<RecordBatch> {
    let raw = read_csv(path, table.table)?;
    let adapted = adapt_record_batch(&raw, table, date_config)?;
    info!(
        "Loaded {} rows into {} table from {}",
        adapted.num_rows(),
        table.table,
        path.display()
    );
    Ok(adapted)
}

/// Load typed records from a CSV file
pub fn load_records<T: TableRecord>(
    path: &Path,
    table: &TableSchema,
    date_config: &DateFormatConfig,
) -> Result<Vec<T>> {
    let batch = load_table(path, table, date_config)?;
    T::from_record_batch(&batch)
}

/// The three inputs of one report run
#[derive(Debug, Clone)]
pub struct ReportInputs {
    pub inbound: Vec<InboundRecord>,
    pub totals: Vec<TotalRecord>,
    pub policy: PolicyTable,
}

/// Load every input named in the config
///
/// All files are checked for existence before any is parsed.
pub fn load_inputs(config: &ReportConfig) -> Result<ReportInputs> {
    require_files(&[
        (config.inbound_path.as_path(), "inbound table"),
        (config.total_path.as_path(), "total table"),
        (config.policy_path.as_path(), "policy comparison table"),
    ])?;

    let start = Instant::now();
    let date_config = &config.date_format_config;

    let inbound = load_records::<InboundRecord>(
        &config.inbound_path,
        &config.columns.inbound.table_schema(),
        date_config,
    )?;
    let totals = load_records::<TotalRecord>(
        &config.total_path,
        &config.columns.total.table_schema(),
        date_config,
    )?;
    let policy = PolicyTable::new(load_table(
        &config.policy_path,
        &config.columns.policy.table_schema(),
        date_config,
    )?);

    debug!("Loaded all inputs in {:?}", start.elapsed());

    Ok(ReportInputs {
        inbound,
        totals,
        policy,
    })
}
