//! Trajectory status: a first-match-wins rule table over the day's signals.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::params::EngineParams;
use crate::series::ScoreSeries;

/// Where the patient stands on the given day. Serialized with the keys the
/// dashboard and exported reports already use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum WellbeingStatus {
    #[serde(rename = "en_progression")]
    Improving,
    #[serde(rename = "stable")]
    Stable,
    #[serde(rename = "rechute_legere")]
    MildRelapse,
    #[serde(rename = "rechute_significative")]
    SignificantRelapse,
    #[serde(rename = "cent_pourcent_atteint")]
    RecoveryReached,
    #[serde(rename = "retabli_100_stable")]
    RecoveryConfirmed,
}

impl WellbeingStatus {
    pub const ALL: [WellbeingStatus; 6] = [
        Self::Improving,
        Self::Stable,
        Self::MildRelapse,
        Self::SignificantRelapse,
        Self::RecoveryReached,
        Self::RecoveryConfirmed,
    ];

    /// Wire key, identical to the serialized form.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Improving => "en_progression",
            Self::Stable => "stable",
            Self::MildRelapse => "rechute_legere",
            Self::SignificantRelapse => "rechute_significative",
            Self::RecoveryReached => "cent_pourcent_atteint",
            Self::RecoveryConfirmed => "retabli_100_stable",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Improving => "Improving",
            Self::Stable => "Stable",
            Self::MildRelapse => "Mild relapse",
            Self::SignificantRelapse => "Significant relapse",
            Self::RecoveryReached => "Recovery reached, awaiting confirmation",
            Self::RecoveryConfirmed => "Recovery confirmed",
        }
    }

    pub const fn is_relapse(self) -> bool {
        matches!(self, Self::MildRelapse | Self::SignificantRelapse)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl fmt::Display for WellbeingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The row of the rule table that decided a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StatusRule {
    ConfirmedRecovery,
    UnconfirmedRecovery,
    NoReference,
    SignificantVariation,
    MildVariation,
    ShortTermWorsening,
    Improvement,
    StableVariation,
    Fallback,
}

impl StatusRule {
    pub const fn status(self) -> WellbeingStatus {
        match self {
            Self::ConfirmedRecovery => WellbeingStatus::RecoveryConfirmed,
            Self::UnconfirmedRecovery => WellbeingStatus::RecoveryReached,
            Self::NoReference => WellbeingStatus::Stable,
            Self::SignificantVariation => WellbeingStatus::SignificantRelapse,
            Self::MildVariation | Self::ShortTermWorsening => WellbeingStatus::MildRelapse,
            Self::Improvement => WellbeingStatus::Improving,
            Self::StableVariation | Self::Fallback => WellbeingStatus::Stable,
        }
    }
}

/// Everything the rule table looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSignals {
    pub is_confirmed_100: bool,
    pub is_unconfirmed_100: bool,
    pub reference: u32,
    pub percent: u8,
    /// Today's score minus the score a week earlier, 0 when that day has
    /// no record.
    pub variation: i64,
    pub improving_trend: bool,
    pub worsening_trend: bool,
}

/// Evaluate the rule table top to bottom; the first matching row wins.
pub fn classify(signals: &StatusSignals, params: &EngineParams) -> StatusRule {
    let variation = signals.variation;
    let near_reference = signals.percent <= params.near_reference_percent;

    if signals.is_confirmed_100 {
        StatusRule::ConfirmedRecovery
    } else if signals.is_unconfirmed_100 {
        StatusRule::UnconfirmedRecovery
    } else if signals.reference == 0 {
        StatusRule::NoReference
    } else if variation >= params.significant_variation || near_reference {
        StatusRule::SignificantVariation
    } else if (params.mild_variation..=params.significant_variation).contains(&variation) {
        StatusRule::MildVariation
    } else if signals.worsening_trend {
        StatusRule::ShortTermWorsening
    } else if variation <= params.improvement_variation || signals.improving_trend {
        StatusRule::Improvement
    } else if (-params.stable_band..=params.stable_band).contains(&variation) {
        StatusRule::StableVariation
    } else {
        StatusRule::Fallback
    }
}

/// Today's score minus the one recorded `variation_lookback_days` earlier.
pub fn weekly_variation(
    series: &ScoreSeries,
    date: Date,
    score_today: u32,
    params: &EngineParams,
) -> i64 {
    series
        .score_days_before(date, params.variation_lookback_days)
        .map_or(0, |earlier| i64::from(score_today) - i64::from(earlier))
}
