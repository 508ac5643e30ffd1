//! Policy comparison aggregation
//!
//! Summaries of how a proposed replenishment policy changes ordering and
//! landed days-of-inventory relative to the current one.

pub mod config;
pub mod scope;
pub mod statistics;

pub use config::PolicyAggregationConfig;
pub use scope::{ALL_CATEGORIES, PolicyScope};
pub use statistics::{
    AdjustedDoiComparison, CategoryRollup, DoiGapSku, DoiMeans, LocationDoi, OrderShift,
    OrderShiftSummary, SkuView, adjusted_doi_comparison, category_rollups, doi_by_location,
    doi_gap_skus, doi_means, mean, mode_reason, order_shift_summary, sku_view,
};
