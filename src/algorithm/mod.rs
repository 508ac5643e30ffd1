//! Report computations
//!
//! Date-lag alignment and projection of the daily series, and aggregation
//! of the policy comparison table. Everything here is a pure function of
//! already-loaded records.

pub mod lag_join;
pub mod policy;
pub mod projection;

pub use lag_join::{DEFAULT_LAG_DAYS, join_with_lag, shift_date};
pub use projection::{project, project_pct};
