//! Report assembly
//!
//! One configurable entry point turns the three loaded inputs into every
//! derived table. The result is a plain value that can be rendered as text,
//! serialized to JSON, or converted to Arrow batches.

pub mod render;

use std::time::Instant;

use arrow::record_batch::RecordBatch;
use log::info;
use serde::{Deserialize, Serialize};

use crate::algorithm::policy::{
    AdjustedDoiComparison, CategoryRollup, DoiGapSku, DoiMeans, LocationDoi, OrderShift,
    OrderShiftSummary, PolicyScope, SkuView, adjusted_doi_comparison, category_rollups,
    doi_by_location, doi_gap_skus, doi_means, order_shift_summary, sku_view,
};
use crate::algorithm::{join_with_lag, project};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::loader::{ReportInputs, load_inputs};
use crate::models::{ArrowSchema, InboundSummary, JoinedRow, PolicyComparisonRecord};

/// Aggregations over the policy comparison table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyReport {
    pub scope: PolicyScope,
    /// Rows left after applying the scope
    pub rows: usize,
    pub doi_means: DoiMeans,
    pub adjusted_doi: AdjustedDoiComparison,
    pub doi_gap_skus: Vec<DoiGapSku>,
    pub newly_ordered: OrderShiftSummary,
    pub newly_ordered_by_category: Vec<CategoryRollup>,
    pub no_longer_ordered: OrderShiftSummary,
    pub no_longer_ordered_by_category: Vec<CategoryRollup>,
    /// Computed over the whole table, ignoring the scope
    pub doi_by_location: Vec<LocationDoi>,
    /// Computed over the whole table, ignoring the scope
    pub sku_view: Option<SkuView>,
}

impl PolicyReport {
    /// Aggregate `scoped` records; per-location and SKU views use `all`
    #[must_use]
    pub fn build(
        scoped: &[PolicyComparisonRecord],
        all: &[PolicyComparisonRecord],
        config: &ReportConfig,
    ) -> Self {
        let policy = &config.policy;
        Self {
            scope: config.scope.clone(),
            rows: scoped.len(),
            doi_means: doi_means(scoped, policy),
            adjusted_doi: adjusted_doi_comparison(scoped, policy),
            doi_gap_skus: doi_gap_skus(scoped, policy.doi_gap),
            newly_ordered: order_shift_summary(scoped, OrderShift::NewlyOrdered),
            newly_ordered_by_category: category_rollups(scoped, OrderShift::NewlyOrdered),
            no_longer_ordered: order_shift_summary(scoped, OrderShift::NoLongerOrdered),
            no_longer_ordered_by_category: category_rollups(scoped, OrderShift::NoLongerOrdered),
            doi_by_location: doi_by_location(all, policy),
            sku_view: config.sku.as_deref().and_then(|sku| sku_view(all, sku)),
        }
    }
}

/// Every derived table of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub lag_days: i64,
    /// One row per total-series day, in input order
    pub joined: Vec<JoinedRow>,
    pub inbound_summary: InboundSummary,
    pub policy: PolicyReport,
}

impl Report {
    /// The joined series as an Arrow batch
    pub fn joined_batch(&self) -> Result<RecordBatch> {
        JoinedRow::to_record_batch(&self.joined)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compute the report from already-loaded inputs
pub fn build_report(inputs: &ReportInputs, config: &ReportConfig) -> Result<Report> {
    let start = Instant::now();
    let aligned = join_with_lag(&inputs.inbound, &inputs.totals, config.lag_days)?;
    let joined = project(aligned);
    info!("Joined series computed in {:?}", start.elapsed());

    let start = Instant::now();
    let scoped_table = inputs.policy.filter(&config.scope.to_expr())?;
    let scoped = scoped_table.records()?;
    let all = inputs.policy.records()?;
    info!(
        "Policy scope kept {} of {} rows",
        scoped.len(),
        inputs.policy.len()
    );
    let policy = PolicyReport::build(&scoped, &all, config);
    info!("Policy aggregations computed in {:?}", start.elapsed());

    Ok(Report {
        lag_days: config.lag_days,
        joined: joined.iter().map(|r| r.to_row()).collect(),
        inbound_summary: InboundSummary::from_records(&inputs.inbound),
        policy,
    })
}

/// Load the configured inputs and build the report
pub fn run_report(config: &ReportConfig) -> Result<Report> {
    let start = Instant::now();
    let inputs = load_inputs(config)?;
    info!("Inputs loaded in {:?}", start.elapsed());

    let report = build_report(&inputs, config)?;
    info!("Report built in {:?}", start.elapsed());
    Ok(report)
}
