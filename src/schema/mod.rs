//! Table schemas, column mappings and type adaptation for the report inputs.

pub mod adapt;
pub mod mapping;
pub mod table;

pub use adapt::{
    ColumnKind, DateFormatConfig, TableCompatibilityReport, adapt_record_batch,
    check_table_schema,
};
pub use mapping::{InboundColumns, PolicyColumns, TotalColumns, columns};
pub use table::{ColumnSpec, TableSchema};
