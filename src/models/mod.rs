//! Record types for the report inputs and derived tables
//!
//! Input records are extracted from the canonical batches built by the
//! loader. Derived records are never persisted; they exist for one run.

pub mod extract;
pub mod inbound;
pub mod joined;
pub mod policy;
pub mod total;
pub mod traits;

pub use inbound::{InboundRecord, InboundSummary};
pub use joined::{AlignedRecord, InboundMatch, JoinedRecord, JoinedRow, Projection};
pub use policy::{PolicyComparisonRecord, PolicyTable};
pub use total::TotalRecord;
pub use traits::{ArrowSchema, TableRecord};
