//! Records produced by aligning the inbound and total series.

use arrow::datatypes::{DataType, Field, Schema};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::inbound::InboundRecord;
use crate::models::total::TotalRecord;
use crate::models::traits::ArrowSchema;

/// Inbound values attached to a total-series day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InboundMatch {
    /// Date of the inbound record, i.e. the total date minus the lag
    pub inbound_date: NaiveDate,
    pub actual_quantity: f64,
    pub max_projected_quantity: f64,
}

impl From<&InboundRecord> for InboundMatch {
    fn from(record: &InboundRecord) -> Self {
        Self {
            inbound_date: record.date,
            actual_quantity: record.actual_quantity,
            max_projected_quantity: record.max_projected_quantity,
        }
    }
}

/// A total-series day with its lagged inbound partner, if any
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRecord {
    pub total: TotalRecord,
    pub inbound: Option<InboundMatch>,
}

/// Outcome of projecting the out-of-stock percentage for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Projection {
    /// `observed * actual / max_projected`, unclamped
    Computed(f64),
    /// Max projected quantity is zero, or the ratio is not finite
    NotComputable,
    /// No inbound record exists at the lagged date
    NoInboundMatch,
}

impl Projection {
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Computed(v) => Some(*v),
            Self::NotComputable | Self::NoInboundMatch => None,
        }
    }

    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Computed(_) => "computed",
            Self::NotComputable => "not_computable",
            Self::NoInboundMatch => "no_inbound_match",
        }
    }
}

/// A total-series day with inbound values and the projected percentage
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRecord {
    pub date: NaiveDate,
    pub oos_contribution_pct: f64,
    pub inbound: Option<InboundMatch>,
    pub projection: Projection,
}

impl JoinedRecord {
    #[must_use]
    pub fn to_row(&self) -> JoinedRow {
        JoinedRow {
            date: self.date,
            inbound_date: self.inbound.map(|m| m.inbound_date),
            actual_quantity: self.inbound.map(|m| m.actual_quantity),
            max_projected_quantity: self.inbound.map(|m| m.max_projected_quantity),
            oos_contribution_pct: self.oos_contribution_pct,
            projected_oos_pct: self.projection.value(),
            projection_status: self.projection.status().to_string(),
        }
    }
}

/// Flat form of [`JoinedRecord`] handed to presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedRow {
    pub date: NaiveDate,
    pub inbound_date: Option<NaiveDate>,
    pub actual_quantity: Option<f64>,
    pub max_projected_quantity: Option<f64>,
    pub oos_contribution_pct: f64,
    pub projected_oos_pct: Option<f64>,
    pub projection_status: String,
}

impl ArrowSchema for JoinedRow {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("date", DataType::Utf8, false),
            Field::new("inbound_date", DataType::Utf8, true),
            Field::new("actual_quantity", DataType::Float64, true),
            Field::new("max_projected_quantity", DataType::Float64, true),
            Field::new("oos_contribution_pct", DataType::Float64, false),
            Field::new("projected_oos_pct", DataType::Float64, true),
            Field::new("projection_status", DataType::Utf8, false),
        ])
    }
}
