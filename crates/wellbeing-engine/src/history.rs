//! Causal replay of the pipeline over every journal date.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::engine::WellbeingEngine;
use crate::reference::reference_baseline;
use crate::series::ScoreSeries;
use crate::status::WellbeingStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusSnapshot {
    pub date: Date,
    pub status: WellbeingStatus,
}

/// A run of consecutive history entries sharing one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusPeriod {
    pub status: WellbeingStatus,
    pub start: Date,
    pub end: Date,
    /// Number of journal days in the run; gaps between them are not counted.
    pub entries: usize,
}

/// One snapshot per recorded date up to `until`, ascending. Each date is
/// assessed with only the entries dated on or before it, and the reference
/// is re-resolved from that prefix.
///
/// Quadratic in the journal length, which stays in the low hundreds.
pub fn replay_history(
    engine: &WellbeingEngine,
    series: &ScoreSeries,
    until: Date,
) -> Vec<StatusSnapshot> {
    series
        .up_to(until)
        .iter()
        .map(|(day, score)| {
            let known = series.up_to(day);
            let reference = reference_baseline(&known);
            let assessment = engine.assess(&known, reference, day, score);
            tracing::trace!(
                date = %day,
                score,
                reference,
                status = %assessment.status,
                "replayed history date"
            );
            StatusSnapshot {
                date: day,
                status: assessment.status,
            }
        })
        .collect()
}

/// Collapse a status history into runs of identical statuses.
pub fn status_periods(history: &[StatusSnapshot]) -> Vec<StatusPeriod> {
    let mut periods: Vec<StatusPeriod> = Vec::new();
    for snapshot in history {
        match periods.last_mut() {
            Some(period) if period.status == snapshot.status => {
                period.end = snapshot.date;
                period.entries += 1;
            }
            _ => periods.push(StatusPeriod {
                status: snapshot.status,
                start: snapshot.date,
                end: snapshot.date,
                entries: 1,
            }),
        }
    }
    periods
}
