//! Settings for the policy comparison aggregations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Thresholds and factors used when summarizing landed days-of-inventory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyAggregationConfig {
    /// Inclusive upper bound on a landed DOI value for it to count in a mean
    pub doi_upper_bound: f64,
    /// Factor applied to the mean (or per-row value) of the new landed DOI
    pub new_doi_scale: f64,
    /// Minimum increase of new over old DOI for a SKU to be flagged
    pub doi_gap: f64,
    /// Apply the bound and scale to the per-location means as well
    pub bound_location_doi: bool,
}

impl Default for PolicyAggregationConfig {
    fn default() -> Self {
        Self {
            doi_upper_bound: 21.0,
            new_doi_scale: 1.0,
            doi_gap: 4.0,
            bound_location_doi: false,
        }
    }
}

impl PolicyAggregationConfig {
    /// Whether a DOI value is at or below the outlier bound
    #[must_use]
    pub fn within_bound(&self, doi: f64) -> bool {
        doi <= self.doi_upper_bound
    }
}

impl fmt::Display for PolicyAggregationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Policy Aggregation:")?;
        writeln!(f, "  DOI Upper Bound: {}", self.doi_upper_bound)?;
        writeln!(f, "  New DOI Scale: {}", self.new_doi_scale)?;
        writeln!(f, "  DOI Gap: {}", self.doi_gap)?;
        writeln!(f, "  Bound Location DOI: {}", self.bound_location_doi)
    }
}
