use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use wellbeing_core::models::record::DailyRecord;

use crate::error::EngineError;
use crate::history::{StatusSnapshot, replay_history};
use crate::params::EngineParams;
use crate::recovery::{Recovery, assess_recovery};
use crate::reference::reference_baseline;
use crate::score::daily_score;
use crate::series::ScoreSeries;
use crate::status::{StatusRule, StatusSignals, WellbeingStatus, classify, weekly_variation};
use crate::trend::{TrendSignals, trend_signals};

/// The dashboard payload for one evaluation date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WellbeingResult {
    pub percent: u8,
    pub label: String,
    pub is_confirmed_100: bool,
    pub is_unconfirmed_100: bool,
    pub score_today: u32,
    pub reference_r: u32,
    pub status: WellbeingStatus,
    pub status_history: Vec<StatusSnapshot>,
}

/// Every intermediate signal behind one day's status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub date: Date,
    pub score_today: u32,
    pub reference: u32,
    pub recovery: Recovery,
    pub variation: i64,
    pub trend: TrendSignals,
    pub rule: StatusRule,
    pub status: WellbeingStatus,
}

/// Stateless evaluator. Holds only its thresholds, so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct WellbeingEngine {
    params: EngineParams,
}

impl WellbeingEngine {
    pub fn new(params: EngineParams) -> Result<Self, EngineError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Evaluate `date` against the stored `records`.
    ///
    /// `today` is the entry being edited for `date`, which may not have
    /// reached storage yet; it replaces any stored record for that day.
    /// Records dated after `date` are ignored.
    pub fn evaluate(
        &self,
        records: &[DailyRecord],
        date: Date,
        today: Option<&DailyRecord>,
    ) -> WellbeingResult {
        let today = today_for(date, today);
        let score_today = match today {
            Some(record) => daily_score(Some(record)),
            None => stored_score(records, date),
        };
        self.evaluate_with_score(records, date, today, score_today)
    }

    /// Like [`Self::evaluate`], with today's score already computed by the
    /// caller.
    #[tracing::instrument(level = "debug", skip_all, fields(%date, records = records.len()))]
    pub fn evaluate_with_score(
        &self,
        records: &[DailyRecord],
        date: Date,
        today: Option<&DailyRecord>,
        score_today: u32,
    ) -> WellbeingResult {
        let today = today_for(date, today);
        let (reference, series) = live_inputs(records, date, today.is_some(), score_today);

        let assessment = self.assess(&series, reference, date, score_today);
        let status_history = replay_history(self, &series, date);

        tracing::debug!(
            score_today,
            reference,
            percent = assessment.recovery.percent,
            status = %assessment.status,
            rule = ?assessment.rule,
            history = status_history.len(),
            "wellbeing evaluated"
        );

        WellbeingResult {
            percent: assessment.recovery.percent,
            label: assessment.recovery.label.to_string(),
            is_confirmed_100: assessment.recovery.is_confirmed_100(),
            is_unconfirmed_100: assessment.recovery.is_unconfirmed_100(),
            score_today,
            reference_r: reference,
            status: assessment.status,
            status_history,
        }
    }

    /// The full reasoning behind `date`'s status, built from the same
    /// inputs as [`Self::evaluate`].
    pub fn explain(
        &self,
        records: &[DailyRecord],
        date: Date,
        today: Option<&DailyRecord>,
    ) -> Assessment {
        let today = today_for(date, today);
        let score_today = match today {
            Some(record) => daily_score(Some(record)),
            None => stored_score(records, date),
        };
        let (reference, series) = live_inputs(records, date, today.is_some(), score_today);
        self.assess(&series, reference, date, score_today)
    }

    /// Run the single-day pipeline. `series` must contain nothing dated
    /// after `date`.
    pub fn assess(
        &self,
        series: &ScoreSeries,
        reference: u32,
        date: Date,
        score_today: u32,
    ) -> Assessment {
        let params = &self.params;
        let recovery = assess_recovery(score_today, reference, series, date, params);
        let variation = weekly_variation(series, date, score_today, params);
        let trend = trend_signals(series, date, score_today, params);

        let rule = classify(
            &StatusSignals {
                is_confirmed_100: recovery.is_confirmed_100(),
                is_unconfirmed_100: recovery.is_unconfirmed_100(),
                reference,
                percent: recovery.percent,
                variation,
                improving_trend: trend.improving,
                worsening_trend: trend.worsening,
            },
            params,
        );

        Assessment {
            date,
            score_today,
            reference,
            recovery,
            variation,
            trend,
            rule,
            status: rule.status(),
        }
    }
}

/// Reference from stored records only, and the score series with today's
/// score laid over it. An in-progress record drops the stored one for the
/// same day before the reference is resolved, and today's score never
/// raises the reference of the evaluation it is part of.
fn live_inputs(
    records: &[DailyRecord],
    date: Date,
    has_today: bool,
    score_today: u32,
) -> (u32, ScoreSeries) {
    let mut series = ScoreSeries::from_records(records).up_to(date);
    if has_today {
        series.remove(date);
    }
    let reference = reference_baseline(&series);
    if has_today || series.contains(date) {
        series.insert(date, score_today);
    }
    (reference, series)
}

fn stored_score(records: &[DailyRecord], date: Date) -> u32 {
    daily_score(records.iter().rev().find(|r| r.date == date))
}

fn today_for(date: Date, today: Option<&DailyRecord>) -> Option<&DailyRecord> {
    match today {
        Some(record) if record.date != date => {
            tracing::warn!(
                %date,
                record_date = %record.date,
                "in-progress record is for another day, ignoring it"
            );
            None
        }
        other => other,
    }
}
