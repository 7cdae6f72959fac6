//! Structural checks on daily records.
//!
//! Scoring never rejects a record; these checks exist so the journal-entry
//! side can surface upstream mistakes to the patient.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::models::record::DailyRecord;
use crate::symptoms::{self, MAX_INTENSITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IssueKind {
    UnknownSymptom,
    IntensityOutOfRange,
    DuplicateSymptom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct RecordIssue {
    pub kind: IssueKind,
    pub symptom_id: String,
    pub message: String,
}

/// List every problem found in `record`. An empty list means the record is
/// clean.
pub fn validate_record(record: &DailyRecord) -> Vec<RecordIssue> {
    let mut issues = Vec::new();
    let mut seen: Vec<&str> = Vec::new();

    for obs in &record.observations {
        if seen.contains(&obs.id.as_str()) {
            issues.push(RecordIssue {
                kind: IssueKind::DuplicateSymptom,
                symptom_id: obs.id.clone(),
                message: format!(
                    "{}: symptom '{}' reported more than once, only the first entry counts",
                    record.date, obs.id
                ),
            });
            continue;
        }
        seen.push(&obs.id);

        if !symptoms::is_canonical(&obs.id) {
            issues.push(RecordIssue {
                kind: IssueKind::UnknownSymptom,
                symptom_id: obs.id.clone(),
                message: format!("{}: unknown symptom '{}'", record.date, obs.id),
            });
        } else if !obs.is_in_range() {
            issues.push(RecordIssue {
                kind: IssueKind::IntensityOutOfRange,
                symptom_id: obs.id.clone(),
                message: format!(
                    "{}: intensity {} for '{}' is outside range [0, {}]",
                    record.date, obs.intensity, obs.id, MAX_INTENSITY
                ),
            });
        }
    }

    issues
}
