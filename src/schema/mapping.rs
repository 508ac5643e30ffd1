//! Configurable header names for each input table.
//!
//! Report variants disagree on header spelling (`Landed DOI New` vs
//! `Landed DOI NEW`), so every source header is a setting. Canonical names
//! are fixed and live in [`columns`].

use serde::{Deserialize, Serialize};

use crate::schema::adapt::types::ColumnKind;
use crate::schema::table::{ColumnSpec, TableSchema};

/// Canonical column names used after loading
pub mod columns {
    pub const DATE: &str = "date";
    pub const ACTUAL_QUANTITY: &str = "actual_quantity";
    pub const MAX_PROJECTED_QUANTITY: &str = "max_projected_quantity";
    pub const OOS_CONTRIBUTION_PCT: &str = "oos_contribution_pct";
    pub const PRODUCT_ID: &str = "product_id";
    pub const PRODUCT_NAME: &str = "product_name";
    pub const LOCATION_ID: &str = "location_id";
    pub const CATEGORY: &str = "category";
    pub const RL_QTY_ACTUAL: &str = "rl_qty_actual";
    pub const RL_QTY_NEW: &str = "rl_qty_new";
    pub const LANDED_DOI_OLD: &str = "landed_doi_old";
    pub const LANDED_DOI_NEW: &str = "landed_doi_new";
    pub const REASON: &str = "reason";
    pub const VERDICT: &str = "verdict";
}

pub const INBOUND_TABLE: &str = "inbound";
pub const TOTAL_TABLE: &str = "total";
pub const POLICY_TABLE: &str = "policy comparison";

/// Headers of the daily inbound table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboundColumns {
    pub date: String,
    pub actual: String,
    pub max_projected: String,
}

impl Default for InboundColumns {
    fn default() -> Self {
        Self {
            date: "Date".to_string(),
            actual: "Actual".to_string(),
            max_projected: "Max Projected".to_string(),
        }
    }
}

impl InboundColumns {
    #[must_use]
    pub fn table_schema(&self) -> TableSchema {
        TableSchema::new(
            INBOUND_TABLE,
            vec![
                ColumnSpec::required(columns::DATE, &self.date, ColumnKind::Date),
                ColumnSpec::required(columns::ACTUAL_QUANTITY, &self.actual, ColumnKind::Number),
                ColumnSpec::required(
                    columns::MAX_PROJECTED_QUANTITY,
                    &self.max_projected,
                    ColumnKind::Number,
                ),
            ],
        )
    }
}

/// Headers of the daily total/out-of-stock table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalColumns {
    pub date: String,
    pub oos_contribution_pct: String,
}

impl Default for TotalColumns {
    fn default() -> Self {
        Self {
            date: "Date".to_string(),
            oos_contribution_pct: "% OOS Contribution".to_string(),
        }
    }
}

impl TotalColumns {
    #[must_use]
    pub fn table_schema(&self) -> TableSchema {
        TableSchema::new(
            TOTAL_TABLE,
            vec![
                ColumnSpec::required(columns::DATE, &self.date, ColumnKind::Date),
                ColumnSpec::required(
                    columns::OOS_CONTRIBUTION_PCT,
                    &self.oos_contribution_pct,
                    ColumnKind::Number,
                ),
            ],
        )
    }
}

/// Headers of the per-SKU policy comparison table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyColumns {
    pub product_id: String,
    pub product_name: String,
    pub location_id: String,
    pub category: String,
    pub rl_qty_actual: String,
    pub rl_qty_new: String,
    pub landed_doi_old: String,
    pub landed_doi_new: String,
    pub reason: String,
    /// Loaded when present; the table is valid without it
    pub verdict: Option<String>,
}

impl Default for PolicyColumns {
    fn default() -> Self {
        Self {
            product_id: "product_id".to_string(),
            product_name: "product_name".to_string(),
            location_id: "location_id".to_string(),
            category: "l1_category_name".to_string(),
            rl_qty_actual: "RL Qty Actual".to_string(),
            rl_qty_new: "RL Qty NEW after MIN QTY WH".to_string(),
            landed_doi_old: "Landed DOI OLD".to_string(),
            landed_doi_new: "Landed DOI New".to_string(),
            reason: "Why Increase/Decrease?".to_string(),
            verdict: Some("Verdict".to_string()),
        }
    }
}

impl PolicyColumns {
    #[must_use]
    pub fn table_schema(&self) -> TableSchema {
        let mut specs = vec![
            ColumnSpec::required(columns::PRODUCT_ID, &self.product_id, ColumnKind::Text),
            ColumnSpec::required(columns::PRODUCT_NAME, &self.product_name, ColumnKind::Text),
            ColumnSpec::required(columns::LOCATION_ID, &self.location_id, ColumnKind::Text),
            ColumnSpec::required(columns::CATEGORY, &self.category, ColumnKind::Text),
            ColumnSpec::required(columns::RL_QTY_ACTUAL, &self.rl_qty_actual, ColumnKind::Number),
            ColumnSpec::required(columns::RL_QTY_NEW, &self.rl_qty_new, ColumnKind::Number),
            ColumnSpec::required(columns::LANDED_DOI_OLD, &self.landed_doi_old, ColumnKind::Number),
            ColumnSpec::required(columns::LANDED_DOI_NEW, &self.landed_doi_new, ColumnKind::Number),
            ColumnSpec::required(columns::REASON, &self.reason, ColumnKind::Text),
        ];
        if let Some(verdict) = &self.verdict {
            specs.push(ColumnSpec::optional(columns::VERDICT, verdict, ColumnKind::Text));
        }
        TableSchema::new(POLICY_TABLE, specs)
    }
}
