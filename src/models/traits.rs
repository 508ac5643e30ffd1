//! Trait definitions for table records
//!
//! Input records are extracted from canonical record batches produced by
//! the loader; output records go back to Arrow for display or hand-off.

use arrow::datatypes::{FieldRef, Schema};
use arrow::record_batch::RecordBatch;
use serde::Serialize;

use crate::error::Result;

/// A record type that can be read from a canonical record batch
pub trait TableRecord: Sized {
    /// Convert a `RecordBatch` to a vector of this record
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>>;
}

/// A record type with a fixed Arrow layout
pub trait ArrowSchema: Sized + Serialize {
    /// Get the Arrow schema for this record
    fn schema() -> Schema;

    /// Convert a slice of records to a `RecordBatch`
    fn to_record_batch(records: &[Self]) -> Result<RecordBatch> {
        let schema = Self::schema();
        let fields: Vec<FieldRef> = schema.fields().iter().cloned().collect();
        Ok(serde_arrow::to_record_batch(&fields, &records)?)
    }
}
