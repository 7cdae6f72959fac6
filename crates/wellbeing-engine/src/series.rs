//! Date-indexed daily scores.

use std::collections::BTreeMap;

use jiff::Span;
use jiff::civil::Date;
use wellbeing_core::models::record::DailyRecord;

use crate::score::daily_score;

/// Daily scores keyed by date, ascending. A date with no entry is a day
/// without a record, which is different from a day scored 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSeries {
    scores: BTreeMap<Date, u32>,
}

impl ScoreSeries {
    /// Score every record. When two records share a date the later one in
    /// input order wins.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a DailyRecord>) -> Self {
        let mut scores = BTreeMap::new();
        for record in records {
            let score = daily_score(Some(record));
            if let Some(previous) = scores.insert(record.date, score) {
                tracing::warn!(
                    date = %record.date,
                    previous,
                    score,
                    "duplicate journal record, keeping the later one"
                );
            }
        }
        Self { scores }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn score_on(&self, date: Date) -> Option<u32> {
        self.scores.get(&date).copied()
    }

    pub fn contains(&self, date: Date) -> bool {
        self.scores.contains_key(&date)
    }

    /// Score `days` calendar days before `date`, if that day has a record.
    pub fn score_days_before(&self, date: Date, days: u32) -> Option<u32> {
        days_before(date, days).and_then(|d| self.score_on(d))
    }

    /// Set the score for `date`, replacing any stored value.
    pub fn insert(&mut self, date: Date, score: u32) {
        self.scores.insert(date, score);
    }

    pub fn remove(&mut self, date: Date) -> Option<u32> {
        self.scores.remove(&date)
    }

    /// Entries dated on or before `date`.
    pub fn up_to(&self, date: Date) -> Self {
        Self {
            scores: self
                .scores
                .range(..=date)
                .map(|(d, s)| (*d, *s))
                .collect(),
        }
    }

    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.scores.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Date, u32)> + '_ {
        self.scores.iter().map(|(d, s)| (*d, *s))
    }

    pub fn max_score(&self) -> Option<u32> {
        self.scores.values().copied().max()
    }
}

pub(crate) fn days_before(date: Date, days: u32) -> Option<Date> {
    let span = Span::new().try_days(i64::from(days)).ok()?;
    date.checked_sub(span).ok()
}
