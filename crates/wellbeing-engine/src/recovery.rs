//! Recovery percentage and full-recovery confirmation.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::params::EngineParams;
use crate::series::ScoreSeries;

/// What the dashboard shows next to the recovery gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
#[ts(export)]
pub enum RecoveryLabel {
    /// No worst day on record yet: recovery is undefined, not 0%.
    NoBaseline,
    Percent(u8),
    Confirmed,
    PendingConfirmation,
}

impl fmt::Display for RecoveryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBaseline => f.write_str("—"),
            Self::Percent(p) => write!(f, "{p}%"),
            Self::Confirmed => f.write_str("100%"),
            Self::PendingConfirmation => f.write_str("100% (pending confirmation)"),
        }
    }
}

/// Outcome of the full-recovery check on a near-zero day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Confirmation {
    /// Consecutive recorded low days ending on the evaluation date.
    pub low_streak_days: u32,
    pub has_notable_aggravation: bool,
    pub confirmed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recovery {
    pub percent: u8,
    pub label: RecoveryLabel,
    /// Present only when today's score was low enough to attempt it.
    pub confirmation: Option<Confirmation>,
}

impl Recovery {
    pub fn is_confirmed_100(&self) -> bool {
        self.label == RecoveryLabel::Confirmed
    }

    pub fn is_unconfirmed_100(&self) -> bool {
        self.label == RecoveryLabel::PendingConfirmation
    }
}

/// Recovery of `score_today` against the reference baseline.
///
/// `series` must hold only data available on `date`; it is used for the
/// confirmation streak and the aggravation veto. A score above the
/// reference clamps to 0% without raising the reference.
pub fn assess_recovery(
    score_today: u32,
    reference: u32,
    series: &ScoreSeries,
    date: Date,
    params: &EngineParams,
) -> Recovery {
    if reference == 0 {
        return Recovery {
            percent: 0,
            label: RecoveryLabel::NoBaseline,
            confirmation: None,
        };
    }
    if score_today > reference {
        return Recovery {
            percent: 0,
            label: RecoveryLabel::Percent(0),
            confirmation: None,
        };
    }

    let percent = recovery_percent(score_today, reference);

    if score_today <= params.low_score_max {
        let confirmation = confirm_full_recovery(series, date, params);
        let label = if confirmation.confirmed {
            RecoveryLabel::Confirmed
        } else {
            RecoveryLabel::PendingConfirmation
        };
        return Recovery {
            percent: 100,
            label,
            confirmation: Some(confirmation),
        };
    }

    Recovery {
        percent,
        label: RecoveryLabel::Percent(percent),
        confirmation: None,
    }
}

/// `round(100 * (R - S) / R)`. Callers guarantee `0 < R` and `S <= R`.
pub fn recovery_percent(score_today: u32, reference: u32) -> u8 {
    let ratio = f64::from(reference - score_today) / f64::from(reference);
    (100.0 * ratio).round().clamp(0.0, 100.0) as u8
}

pub fn confirm_full_recovery(
    series: &ScoreSeries,
    date: Date,
    params: &EngineParams,
) -> Confirmation {
    let low_streak_days = low_streak(series, date, params.low_score_max);
    let has_notable_aggravation = has_notable_aggravation(series, params);
    Confirmation {
        low_streak_days,
        has_notable_aggravation,
        confirmed: low_streak_days >= params.confirmation_days && !has_notable_aggravation,
    }
}

/// Length of the unbroken run of recorded days scoring at most `max`,
/// walking back from `date`. A missing day ends the run.
pub fn low_streak(series: &ScoreSeries, date: Date, max: u32) -> u32 {
    let mut streak = 0;
    let mut day = date;
    while series.score_on(day).is_some_and(|s| s <= max) {
        streak += 1;
        match day.yesterday() {
            Ok(previous) => day = previous,
            Err(_) => break,
        }
    }
    streak
}

/// Whether any two calendar-consecutive recorded days show a jump of at
/// least `aggravation_jump` from a day at or below `aggravation_floor`.
pub fn has_notable_aggravation(series: &ScoreSeries, params: &EngineParams) -> bool {
    series
        .iter()
        .zip(series.iter().skip(1))
        .any(|((day, score), (next_day, next_score))| {
            day.tomorrow().is_ok_and(|d| d == next_day)
                && score <= params.aggravation_floor
                && next_score.saturating_sub(score) >= params.aggravation_jump
        })
}
