use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::observation::SymptomObservation;
use crate::error::CoreError;

/// A patient's journal entry for one calendar day.
///
/// Observations are sparse: a symptom with no observation counts as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyRecord {
    pub date: Date,
    #[serde(default)]
    pub observations: Vec<SymptomObservation>,
}

impl DailyRecord {
    pub fn new(date: Date) -> Self {
        Self {
            date,
            observations: Vec::new(),
        }
    }

    pub fn with_observation(mut self, id: impl Into<String>, intensity: i32) -> Self {
        self.observations.push(SymptomObservation::new(id, intensity));
        self
    }

    /// Clamped intensity of the first observation with this id.
    pub fn intensity_of(&self, id: &str) -> Option<u8> {
        self.observations
            .iter()
            .find(|o| o.id == id)
            .map(SymptomObservation::clamped_intensity)
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<Date, CoreError> {
    value
        .trim()
        .parse::<Date>()
        .map_err(|source| CoreError::InvalidDate {
            value: value.to_string(),
            source,
        })
}
