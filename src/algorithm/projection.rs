//! Projected out-of-stock percentage
//!
//! `projected = observed * actual / max_projected`, with explicit outcomes
//! for days that have no inbound partner or no projected quantity.

use log::{info, warn};

use crate::models::{AlignedRecord, InboundMatch, JoinedRecord, Projection};

/// Project one observed percentage against its inbound quantities
#[must_use]
pub fn project_pct(observed_pct: f64, inbound: Option<&InboundMatch>) -> Projection {
    let Some(inbound) = inbound else {
        return Projection::NoInboundMatch;
    };
    if inbound.max_projected_quantity == 0.0 {
        return Projection::NotComputable;
    }
    let projected = observed_pct * (inbound.actual_quantity / inbound.max_projected_quantity);
    if projected.is_finite() {
        Projection::Computed(projected)
    } else {
        Projection::NotComputable
    }
}

/// Attach a projection to every aligned record
#[must_use]
pub fn project(aligned: Vec<AlignedRecord>) -> Vec<JoinedRecord> {
    let joined: Vec<JoinedRecord> = aligned
        .into_iter()
        .map(|record| JoinedRecord {
            date: record.total.date,
            oos_contribution_pct: record.total.oos_contribution_pct,
            projection: project_pct(record.total.oos_contribution_pct, record.inbound.as_ref()),
            inbound: record.inbound,
        })
        .collect();

    let not_computable = joined
        .iter()
        .filter(|r| r.projection == Projection::NotComputable)
        .count();
    let unmatched = joined
        .iter()
        .filter(|r| r.projection == Projection::NoInboundMatch)
        .count();

    if not_computable > 0 {
        warn!("{not_computable} records have no projected quantity; projection not computable");
    }
    info!(
        "Projected {} of {} records ({unmatched} without inbound match)",
        joined.len() - not_computable - unmatched,
        joined.len()
    );

    joined
}
