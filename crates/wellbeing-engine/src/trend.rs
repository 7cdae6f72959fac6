//! Short- and long-term trend detection over recent daily scores.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::params::EngineParams;
use crate::series::ScoreSeries;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendSignals {
    /// Scores have been falling over the long window.
    pub improving: bool,
    /// Today is higher than the day(s) just before.
    pub worsening: bool,
    /// Fitted change in score per day over the long window, when enough
    /// samples exist. Negative means falling scores.
    pub slope: Option<f64>,
}

pub fn trend_signals(
    series: &ScoreSeries,
    date: Date,
    score_today: u32,
    params: &EngineParams,
) -> TrendSignals {
    let slope = long_term_slope(series, date, params);
    TrendSignals {
        improving: slope.is_some_and(|b| b < -params.long_trend_min_slope),
        worsening: is_short_term_worsening(series, date, score_today),
        slope,
    }
}

/// Least-squares slope of the scores recorded over the long window ending
/// at `date`. Days without a record are skipped. `x` runs forward in time:
/// today is 0, yesterday -1, and so on.
pub fn long_term_slope(series: &ScoreSeries, date: Date, params: &EngineParams) -> Option<f64> {
    let samples: Vec<(f64, f64)> = (0..params.long_trend_window_days)
        .filter_map(|days_ago| {
            let score = series.score_days_before(date, days_ago)?;
            Some((-f64::from(days_ago), f64::from(score)))
        })
        .collect();

    if samples.len() < params.long_trend_min_samples {
        return None;
    }
    ols_slope(&samples)
}

/// Today's score above yesterday's, or a strict rise over the last three
/// days. Missing days never count as a rise.
pub fn is_short_term_worsening(series: &ScoreSeries, date: Date, score_today: u32) -> bool {
    let yesterday = series.score_days_before(date, 1);
    let day_before = series.score_days_before(date, 2);

    let two_day_rise = yesterday.is_some_and(|s1| s1 < score_today);
    let three_day_rise = matches!(
        (day_before, yesterday),
        (Some(s2), Some(s1)) if s2 < s1 && s1 < score_today
    );
    two_day_rise || three_day_rise
}

fn ols_slope(samples: &[(f64, f64)]) -> Option<f64> {
    let n = samples.len() as f64;
    let sum_x: f64 = samples.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = samples.iter().map(|(_, y)| y).sum();
    let sum_xy: f64 = samples.iter().map(|(x, y)| x * y).sum();
    let sum_xx: f64 = samples.iter().map(|(x, _)| x * x).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator.abs() < 1e-10 {
        return None;
    }
    Some((n * sum_xy - sum_x * sum_y) / denominator)
}
