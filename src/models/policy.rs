//! Per-SKU replenishment policy comparison records

use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter_expression::{Expr, filter_record_batch};
use crate::models::extract::{
    number_at, number_column, optional_text_at, optional_text_column, text_at, text_column,
};
use crate::models::traits::{ArrowSchema, TableRecord};
use crate::schema::PolicyColumns;
use crate::schema::mapping::{POLICY_TABLE, columns};

/// One SKU/location row comparing the current and proposed policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyComparisonRecord {
    pub product_id: String,
    pub product_name: String,
    pub location_id: String,
    pub category: String,
    /// Replenishment quantity ordered under the current policy
    pub rl_qty_actual: f64,
    /// Replenishment quantity under the proposed policy
    pub rl_qty_new: f64,
    pub landed_doi_old: f64,
    pub landed_doi_new: f64,
    /// Analyst's explanation of the quantity change
    pub reason: String,
    pub verdict: Option<String>,
}

impl PolicyComparisonRecord {
    /// Not ordered today, ordered under the proposed policy
    #[must_use]
    pub fn is_newly_ordered(&self) -> bool {
        self.rl_qty_actual == 0.0 && self.rl_qty_new != 0.0
    }

    /// Ordered today, not ordered under the proposed policy
    #[must_use]
    pub fn is_no_longer_ordered(&self) -> bool {
        self.rl_qty_actual != 0.0 && self.rl_qty_new == 0.0
    }
}

impl TableRecord for PolicyComparisonRecord {
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        let product_id = text_column(batch, POLICY_TABLE, columns::PRODUCT_ID)?;
        let product_name = text_column(batch, POLICY_TABLE, columns::PRODUCT_NAME)?;
        let location_id = text_column(batch, POLICY_TABLE, columns::LOCATION_ID)?;
        let category = text_column(batch, POLICY_TABLE, columns::CATEGORY)?;
        let rl_qty_actual = number_column(batch, POLICY_TABLE, columns::RL_QTY_ACTUAL)?;
        let rl_qty_new = number_column(batch, POLICY_TABLE, columns::RL_QTY_NEW)?;
        let doi_old = number_column(batch, POLICY_TABLE, columns::LANDED_DOI_OLD)?;
        let doi_new = number_column(batch, POLICY_TABLE, columns::LANDED_DOI_NEW)?;
        let reason = text_column(batch, POLICY_TABLE, columns::REASON)?;
        let verdict = optional_text_column(batch, POLICY_TABLE, columns::VERDICT)?;

        Ok((0..batch.num_rows())
            .map(|row| Self {
                product_id: text_at(product_id, row),
                product_name: text_at(product_name, row),
                location_id: text_at(location_id, row),
                category: text_at(category, row),
                rl_qty_actual: number_at(rl_qty_actual, row),
                rl_qty_new: number_at(rl_qty_new, row),
                landed_doi_old: number_at(doi_old, row),
                landed_doi_new: number_at(doi_new, row),
                reason: text_at(reason, row),
                verdict: verdict.and_then(|v| optional_text_at(v, row)),
            })
            .collect())
    }
}

impl ArrowSchema for PolicyComparisonRecord {
    fn schema() -> Schema {
        PolicyColumns::default()
            .table_schema()
            .canonical_schema()
            .as_ref()
            .clone()
    }
}

/// The loaded policy table, kept columnar until it is filtered
#[derive(Debug, Clone)]
pub struct PolicyTable {
    batch: RecordBatch,
}

impl PolicyTable {
    #[must_use]
    pub const fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// Build a table from in-memory records
    pub fn from_records(records: &[PolicyComparisonRecord]) -> Result<Self> {
        Ok(Self::new(PolicyComparisonRecord::to_record_batch(records)?))
    }

    #[must_use]
    pub const fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.batch.num_rows()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batch.num_rows() == 0
    }

    /// Keep only the rows matching `expr`
    pub fn filter(&self, expr: &Expr) -> Result<Self> {
        Ok(Self::new(filter_record_batch(&self.batch, expr)?))
    }

    pub fn records(&self) -> Result<Vec<PolicyComparisonRecord>> {
        PolicyComparisonRecord::from_record_batch(&self.batch)
    }
}
