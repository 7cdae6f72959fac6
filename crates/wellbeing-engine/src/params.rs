use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::EngineError;

/// Thresholds used across the pipeline.
///
/// The defaults are the clinical rules the dashboard was designed around;
/// overriding them is meant for research exports, not for patients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct EngineParams {
    /// A day at or below this score counts as "near-zero symptoms".
    pub low_score_max: u32,
    /// Consecutive low days needed before 100% is confirmed.
    pub confirmation_days: u32,
    /// Aggravation only counts when the day before scored at most this.
    pub aggravation_floor: u32,
    /// Day-over-day increase that counts as a notable aggravation.
    pub aggravation_jump: u32,
    /// Days looked at by the long-term trend, today included.
    pub long_trend_window_days: u32,
    pub long_trend_min_samples: usize,
    /// Minimum daily decrease of the fitted line to call it an improvement.
    pub long_trend_min_slope: f64,
    /// How far back the day-over-week variation compares.
    pub variation_lookback_days: u32,
    pub significant_variation: i64,
    pub mild_variation: i64,
    pub improvement_variation: i64,
    /// Variation within `±stable_band` is stable.
    pub stable_band: i64,
    /// Recovery at or below this percentage is treated as back at the worst.
    pub near_reference_percent: u8,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            low_score_max: 2,
            confirmation_days: 30,
            aggravation_floor: 20,
            aggravation_jump: 10,
            long_trend_window_days: 7,
            long_trend_min_samples: 4,
            long_trend_min_slope: 0.3,
            variation_lookback_days: 7,
            significant_variation: 10,
            mild_variation: 5,
            improvement_variation: -5,
            stable_band: 4,
            near_reference_percent: 15,
        }
    }
}

impl EngineParams {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.confirmation_days == 0 {
            return Err(invalid("confirmation_days", "must be at least 1"));
        }
        if self.aggravation_jump == 0 {
            return Err(invalid("aggravation_jump", "must be at least 1"));
        }
        if self.long_trend_window_days < 2 {
            return Err(invalid("long_trend_window_days", "must be at least 2"));
        }
        if self.long_trend_min_samples < 2 {
            return Err(invalid(
                "long_trend_min_samples",
                "a line needs at least 2 samples",
            ));
        }
        if self.long_trend_min_samples > self.long_trend_window_days as usize {
            return Err(invalid(
                "long_trend_min_samples",
                "cannot exceed long_trend_window_days",
            ));
        }
        if !self.long_trend_min_slope.is_finite() || self.long_trend_min_slope < 0.0 {
            return Err(invalid(
                "long_trend_min_slope",
                "must be a finite, non-negative number",
            ));
        }
        if self.variation_lookback_days == 0 {
            return Err(invalid("variation_lookback_days", "must be at least 1"));
        }
        if self.stable_band < 0 {
            return Err(invalid("stable_band", "must not be negative"));
        }
        if self.mild_variation > self.significant_variation {
            return Err(invalid(
                "mild_variation",
                "cannot exceed significant_variation",
            ));
        }
        if self.improvement_variation >= 0 {
            return Err(invalid("improvement_variation", "must be negative"));
        }
        if self.near_reference_percent > 100 {
            return Err(invalid("near_reference_percent", "must be within 0..=100"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, message: &str) -> EngineError {
    EngineError::InvalidParams {
        field,
        message: message.to_string(),
    }
}
