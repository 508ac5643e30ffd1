//! Table definitions: which source header feeds which canonical column.

use std::sync::Arc;

use arrow::datatypes::{Field, Schema, SchemaRef};

use crate::schema::adapt::conversions::storage_type;
use crate::schema::adapt::types::ColumnKind;

/// One column of a table definition
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    /// Name used after loading
    pub canonical: &'static str,
    /// Header expected in the source file
    pub source: String,
    pub kind: ColumnKind,
    pub required: bool,
}

impl ColumnSpec {
    pub fn required(canonical: &'static str, source: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            canonical,
            source: source.into(),
            kind,
            required: true,
        }
    }

    pub fn optional(canonical: &'static str, source: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            canonical,
            source: source.into(),
            kind,
            required: false,
        }
    }
}

/// Explicit schema of one input table
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    /// Table name used in logs and errors
    pub table: &'static str,
    pub columns: Vec<ColumnSpec>,
}

impl TableSchema {
    #[must_use]
    pub const fn new(table: &'static str, columns: Vec<ColumnSpec>) -> Self {
        Self { table, columns }
    }

    /// Arrow schema of the table after adaptation
    #[must_use]
    pub fn canonical_schema(&self) -> SchemaRef {
        let fields: Vec<Field> = self
            .columns
            .iter()
            .map(|c| {
                let nullable = matches!(c.kind, ColumnKind::Text) || !c.required;
                Field::new(c.canonical, storage_type(c.kind), nullable)
            })
            .collect();
        Arc::new(Schema::new(fields))
    }

    #[must_use]
    pub fn column(&self, canonical: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.canonical == canonical)
    }
}
