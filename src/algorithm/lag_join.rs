//! Date-lag alignment of the inbound series onto the total series
//!
//! Each inbound date is shifted forward by the lag and the total series is
//! left-joined against the shifted key. Output order follows the total
//! series.

use chrono::{NaiveDate, TimeDelta};
use log::{debug, info, warn};
use rustc_hash::FxHashMap;

use crate::error::{ReportError, Result};
use crate::models::{AlignedRecord, InboundMatch, InboundRecord, TotalRecord};

/// Default number of days between an inbound shipment and the
/// out-of-stock observation it affects
pub const DEFAULT_LAG_DAYS: i64 = 2;

/// Shift `date` by `lag_days`, failing when the result leaves the calendar
pub fn shift_date(date: NaiveDate, lag_days: i64) -> Result<NaiveDate> {
    TimeDelta::try_days(lag_days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(ReportError::DateOutOfRange { date, lag_days })
}

/// Left-join `totals` with `inbound` where `total.date == inbound.date + lag_days`
///
/// Every total record yields exactly one aligned record. A total date that
/// is reached by more than one inbound record is an `AmbiguousJoin` error;
/// duplicated inbound dates that no total record reaches are only logged.
pub fn join_with_lag(
    inbound: &[InboundRecord],
    totals: &[TotalRecord],
    lag_days: i64,
) -> Result<Vec<AlignedRecord>> {
    let mut by_shifted_date: FxHashMap<NaiveDate, Vec<&InboundRecord>> = FxHashMap::default();
    for record in inbound {
        let key = shift_date(record.date, lag_days)?;
        by_shifted_date.entry(key).or_default().push(record);
    }

    let mut aligned = Vec::with_capacity(totals.len());
    let mut matched = 0usize;
    for total in totals {
        let candidates = by_shifted_date.get(&total.date).map_or(&[][..], Vec::as_slice);
        let inbound = match candidates {
            [] => None,
            [single] => {
                matched += 1;
                Some(InboundMatch::from(*single))
            }
            many => {
                return Err(ReportError::AmbiguousJoin {
                    date: total.date,
                    candidates: many.len(),
                });
            }
        };
        aligned.push(AlignedRecord {
            total: total.clone(),
            inbound,
        });
    }

    let mut duplicates: Vec<_> = by_shifted_date
        .iter()
        .filter(|(_, records)| records.len() > 1)
        .map(|(_, records)| (records[0].date, records.len()))
        .collect();
    duplicates.sort_unstable();
    for (date, count) in duplicates {
        warn!("Inbound date {date} appears {count} times and matches no total record");
    }

    info!(
        "Joined {} total records with lag {lag_days}: {matched} matched, {} without inbound data",
        totals.len(),
        totals.len() - matched
    );
    debug!(
        "{} inbound records did not reach any total date",
        inbound.len().saturating_sub(matched)
    );

    Ok(aligned)
}
