//! Daily inbound shipment records

use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::extract::{date_at, date_column, number_at, number_column};
use crate::models::traits::TableRecord;
use crate::schema::mapping::{INBOUND_TABLE, columns};

/// Received versus maximum projected inbound quantity for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundRecord {
    pub date: NaiveDate,
    pub actual_quantity: f64,
    pub max_projected_quantity: f64,
}

impl InboundRecord {
    #[must_use]
    pub const fn new(date: NaiveDate, actual_quantity: f64, max_projected_quantity: f64) -> Self {
        Self {
            date,
            actual_quantity,
            max_projected_quantity,
        }
    }
}

impl TableRecord for InboundRecord {
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        let dates = date_column(batch, INBOUND_TABLE, columns::DATE)?;
        let actual = number_column(batch, INBOUND_TABLE, columns::ACTUAL_QUANTITY)?;
        let projected = number_column(batch, INBOUND_TABLE, columns::MAX_PROJECTED_QUANTITY)?;

        (0..batch.num_rows())
            .map(|row| {
                Ok(Self {
                    date: date_at(dates, row, INBOUND_TABLE, columns::DATE)?,
                    actual_quantity: number_at(actual, row),
                    max_projected_quantity: number_at(projected, row),
                })
            })
            .collect()
    }
}

/// Totals across an inbound series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InboundSummary {
    pub days: usize,
    pub total_actual: f64,
    pub total_max_projected: f64,
    /// `total_actual / total_max_projected`; absent when nothing was projected
    pub fill_rate: Option<f64>,
}

impl InboundSummary {
    #[must_use]
    pub fn from_records(records: &[InboundRecord]) -> Self {
        let total_actual: f64 = records.iter().map(|r| r.actual_quantity).sum();
        let total_max_projected: f64 = records.iter().map(|r| r.max_projected_quantity).sum();
        let fill_rate = (total_max_projected != 0.0)
            .then(|| total_actual / total_max_projected)
            .filter(|r| r.is_finite());

        Self {
            days: records.len(),
            total_actual,
            total_max_projected,
            fill_rate,
        }
    }
}
