//! Inbound-lagged out-of-stock projection and replenishment policy
//! comparison reports.
//!
//! The library loads three CSV inputs into Arrow record batches, validates
//! them against configurable column mappings, aligns the inbound series
//! with the out-of-stock series by a day lag, projects the out-of-stock
//! percentage, and aggregates the policy comparison table.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter_expression;
pub mod loader;
pub mod models;
pub mod report;
pub mod schema;

// Core types
pub use config::{OutputFormat, ReportConfig};
pub use error::{ReportError, Result};
pub use report::{PolicyReport, Report, build_report, run_report};
pub use report::render::render_text;

// Pipeline stages
pub use algorithm::{join_with_lag, project};
pub use loader::{ReportInputs, load_inputs};

// Records
pub use models::{
    InboundRecord, InboundSummary, JoinedRecord, JoinedRow, PolicyComparisonRecord, PolicyTable,
    Projection, TotalRecord,
};

// Arrow types
pub use arrow::record_batch::RecordBatch;
