use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::record::DailyRecord;
use crate::error::CoreError;

/// All daily records of one patient, as handed over by the journal store.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Journal {
    pub patient_id: Uuid,
    #[serde(default)]
    pub records: Vec<DailyRecord>,
}

impl Journal {
    pub fn new(patient_id: Uuid) -> Self {
        Self {
            patient_id,
            records: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The last record stored for `date`, if any.
    pub fn record_on(&self, date: Date) -> Option<&DailyRecord> {
        self.records.iter().rev().find(|r| r.date == date)
    }

    /// Records dated on or before `date`, in stored order.
    pub fn records_until(&self, date: Date) -> impl Iterator<Item = &DailyRecord> {
        self.records.iter().filter(move |r| r.date <= date)
    }

    pub fn latest_date(&self) -> Option<Date> {
        self.records.iter().map(|r| r.date).max()
    }
}
