//! Daily out-of-stock contribution records

use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::extract::{date_at, date_column, number_at, number_column};
use crate::models::traits::TableRecord;
use crate::schema::mapping::{TOTAL_TABLE, columns};

/// Observed out-of-stock contribution for one day
///
/// The percentage is nominally in `[0, 100]` but is not range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalRecord {
    pub date: NaiveDate,
    pub oos_contribution_pct: f64,
}

impl TotalRecord {
    #[must_use]
    pub const fn new(date: NaiveDate, oos_contribution_pct: f64) -> Self {
        Self {
            date,
            oos_contribution_pct,
        }
    }
}

impl TableRecord for TotalRecord {
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        let dates = date_column(batch, TOTAL_TABLE, columns::DATE)?;
        let pct = number_column(batch, TOTAL_TABLE, columns::OOS_CONTRIBUTION_PCT)?;

        (0..batch.num_rows())
            .map(|row| {
                Ok(Self {
                    date: date_at(dates, row, TOTAL_TABLE, columns::DATE)?,
                    oos_contribution_pct: number_at(pct, row),
                })
            })
            .collect()
    }
}
