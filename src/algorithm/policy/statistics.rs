//! Aggregations over policy comparison records
//!
//! All functions take an already-scoped slice of records and return new
//! values. Means over an empty set are `None`.

use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::algorithm::policy::config::PolicyAggregationConfig;
use crate::models::PolicyComparisonRecord;

/// Arithmetic mean, `None` for an empty input
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Most frequent non-empty reason; ties go to the smallest string
#[must_use]
pub fn mode_reason<'a>(reasons: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for reason in reasons.into_iter().map(str::trim).filter(|r| !r.is_empty()) {
        *counts.entry(reason).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by(|(ra, ca), (rb, cb)| ca.cmp(cb).then_with(|| rb.cmp(ra)))
        .map(|(reason, _)| reason.to_string())
}

/// Number of distinct non-blank product ids
fn distinct_skus<'a>(records: impl IntoIterator<Item = &'a PolicyComparisonRecord>) -> usize {
    records
        .into_iter()
        .map(|r| r.product_id.trim())
        .filter(|id| !id.is_empty())
        .collect::<FxHashSet<_>>()
        .len()
}

/// Mean landed DOI under the old and new policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoiMeans {
    pub old: Option<f64>,
    /// Already multiplied by the configured scale
    pub new: Option<f64>,
    /// Rows that passed the bound for the old column
    pub old_rows: usize,
    /// Rows that passed the bound for the new column
    pub new_rows: usize,
}

/// Mean landed DOI per column, excluding values above the bound
///
/// Each column is filtered on its own, so a row can count towards one mean
/// and not the other.
#[must_use]
pub fn doi_means(records: &[PolicyComparisonRecord], config: &PolicyAggregationConfig) -> DoiMeans {
    let old: Vec<f64> = records
        .iter()
        .map(|r| r.landed_doi_old)
        .filter(|v| config.within_bound(*v))
        .collect();
    let new: Vec<f64> = records
        .iter()
        .map(|r| r.landed_doi_new)
        .filter(|v| config.within_bound(*v))
        .collect();

    DoiMeans {
        old: mean(old.iter().copied()),
        new: mean(new.iter().copied()).map(|m| m * config.new_doi_scale),
        old_rows: old.len(),
        new_rows: new.len(),
    }
}

/// Direction of an ordering change between the two policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderShift {
    /// Not ordered today, ordered under the new policy
    NewlyOrdered,
    /// Ordered today, not ordered under the new policy
    NoLongerOrdered,
}

impl OrderShift {
    #[must_use]
    pub fn matches(self, record: &PolicyComparisonRecord) -> bool {
        match self {
            Self::NewlyOrdered => record.is_newly_ordered(),
            Self::NoLongerOrdered => record.is_no_longer_ordered(),
        }
    }

    /// The quantity that changes hands: the new order, or the dropped one
    #[must_use]
    pub const fn quantity(self, record: &PolicyComparisonRecord) -> f64 {
        match self {
            Self::NewlyOrdered => record.rl_qty_new,
            Self::NoLongerOrdered => record.rl_qty_actual,
        }
    }
}

/// Totals for the SKUs whose ordering changes in one direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderShiftSummary {
    pub shift: OrderShift,
    pub sku_count: usize,
    pub quantity: f64,
    /// Mean new landed DOI over the set, unbounded
    pub mean_doi_new: Option<f64>,
}

#[must_use]
pub fn order_shift_summary(
    records: &[PolicyComparisonRecord],
    shift: OrderShift,
) -> OrderShiftSummary {
    let selected: Vec<&PolicyComparisonRecord> =
        records.iter().filter(|r| shift.matches(r)).collect();

    OrderShiftSummary {
        shift,
        sku_count: distinct_skus(selected.iter().copied()),
        quantity: selected.iter().map(|r| shift.quantity(r)).sum(),
        mean_doi_new: mean(selected.iter().map(|r| r.landed_doi_new)),
    }
}

/// One category's share of an ordering change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRollup {
    pub category: String,
    pub sku_count: usize,
    pub quantity: f64,
    pub mode_reason: Option<String>,
}

/// Per-category rollup of an ordering change, ordered by category
#[must_use]
pub fn category_rollups(records: &[PolicyComparisonRecord], shift: OrderShift) -> Vec<CategoryRollup> {
    let chunks = records
        .iter()
        .filter(|r| shift.matches(r))
        .sorted_by(|a, b| a.category.cmp(&b.category))
        .chunk_by(|r| r.category.clone());

    let mut rollups = Vec::new();
    for (category, group) in &chunks {
        let rows: Vec<&PolicyComparisonRecord> = group.collect();
        rollups.push(CategoryRollup {
            category,
            sku_count: distinct_skus(rows.iter().copied()),
            quantity: rows.iter().map(|r| shift.quantity(r)).sum(),
            mode_reason: mode_reason(rows.iter().map(|r| r.reason.as_str())),
        });
    }
    rollups
}

/// DOI means for one location
///
/// Plain means over every row of the location unless
/// [`PolicyAggregationConfig::bound_location_doi`] is set, in which case
/// they are computed like [`doi_means`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDoi {
    pub location_id: String,
    pub means: DoiMeans,
}

fn unbounded_doi_means(records: &[PolicyComparisonRecord]) -> DoiMeans {
    DoiMeans {
        old: mean(records.iter().map(|r| r.landed_doi_old)),
        new: mean(records.iter().map(|r| r.landed_doi_new)),
        old_rows: records.len(),
        new_rows: records.len(),
    }
}

/// DOI means per location, ordered by location id
#[must_use]
pub fn doi_by_location(
    records: &[PolicyComparisonRecord],
    config: &PolicyAggregationConfig,
) -> Vec<LocationDoi> {
    records
        .iter()
        .cloned()
        .into_group_map_by(|r| r.location_id.clone())
        .into_iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(location_id, rows)| LocationDoi {
            means: if config.bound_location_doi {
                doi_means(&rows, config)
            } else {
                unbounded_doi_means(&rows)
            },
            location_id,
        })
        .collect()
}

/// A SKU whose new landed DOI exceeds the old one by at least the gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoiGapSku {
    pub product_id: String,
    pub product_name: String,
    pub location_id: String,
    pub landed_doi_old: f64,
    pub landed_doi_new: f64,
}

impl DoiGapSku {
    fn from_record(record: &PolicyComparisonRecord, landed_doi_new: f64) -> Self {
        Self {
            product_id: record.product_id.clone(),
            product_name: record.product_name.clone(),
            location_id: record.location_id.clone(),
            landed_doi_old: record.landed_doi_old,
            landed_doi_new,
        }
    }
}

/// Records with `landed_doi_new >= landed_doi_old + gap`, in input order
#[must_use]
pub fn doi_gap_skus(records: &[PolicyComparisonRecord], gap: f64) -> Vec<DoiGapSku> {
    records
        .iter()
        .filter(|r| r.landed_doi_new >= r.landed_doi_old + gap)
        .map(|r| DoiGapSku::from_record(r, r.landed_doi_new))
        .collect()
}

/// DOI comparison with the new value scaled per row before bounding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedDoiComparison {
    /// Rows left after dropping non-positive old DOI and out-of-bound values
    pub rows: usize,
    pub mean_adjusted_new: Option<f64>,
    pub mean_old: Option<f64>,
    /// Rows where the adjusted new DOI exceeds the old by at least the gap;
    /// `landed_doi_new` holds the adjusted value
    pub gap_skus: Vec<DoiGapSku>,
}

#[must_use]
pub fn adjusted_doi_comparison(
    records: &[PolicyComparisonRecord],
    config: &PolicyAggregationConfig,
) -> AdjustedDoiComparison {
    let kept: Vec<(&PolicyComparisonRecord, f64)> = records
        .iter()
        .filter(|r| r.landed_doi_old > 0.0)
        .map(|r| (r, r.landed_doi_new * config.new_doi_scale))
        .filter(|(r, adjusted)| config.within_bound(*adjusted) && config.within_bound(r.landed_doi_old))
        .collect();

    AdjustedDoiComparison {
        rows: kept.len(),
        mean_adjusted_new: mean(kept.iter().map(|(_, adjusted)| *adjusted)),
        mean_old: mean(kept.iter().map(|(r, _)| r.landed_doi_old)),
        gap_skus: kept
            .iter()
            .filter(|(r, adjusted)| *adjusted >= r.landed_doi_old + config.doi_gap)
            .map(|(r, adjusted)| DoiGapSku::from_record(r, *adjusted))
            .collect(),
    }
}

/// Averages for a single product across its locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuView {
    pub product_id: String,
    pub product_name: String,
    pub rows: usize,
    pub mean_doi_old: f64,
    pub mean_doi_new: f64,
    pub mean_rl_qty_actual: f64,
    pub mean_rl_qty_new: f64,
}

/// Averages for `product_id`, or `None` if no record carries it
#[must_use]
pub fn sku_view(records: &[PolicyComparisonRecord], product_id: &str) -> Option<SkuView> {
    let rows: Vec<&PolicyComparisonRecord> = records
        .iter()
        .filter(|r| r.product_id == product_id)
        .collect();
    let first = rows.first()?;

    Some(SkuView {
        product_id: first.product_id.clone(),
        product_name: first.product_name.clone(),
        rows: rows.len(),
        mean_doi_old: mean(rows.iter().map(|r| r.landed_doi_old))?,
        mean_doi_new: mean(rows.iter().map(|r| r.landed_doi_new))?,
        mean_rl_qty_actual: mean(rows.iter().map(|r| r.rl_qty_actual))?,
        mean_rl_qty_new: mean(rows.iter().map(|r| r.rl_qty_new))?,
    })
}
