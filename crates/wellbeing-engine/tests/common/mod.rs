#![allow(dead_code)]

use jiff::ToSpan;
use jiff::civil::{Date, date};
use wellbeing_core::models::record::DailyRecord;
use wellbeing_core::symptoms::{MAX_INTENSITY, SYMPTOMS};

pub const TODAY: Date = date(2026, 6, 30);

pub fn days_ago(n: i64) -> Date {
    TODAY.checked_sub(n.days()).unwrap()
}

/// A record whose daily score is exactly `score`, spread over the
/// catalogue front to back.
pub fn scored(date: Date, score: u32) -> DailyRecord {
    assert!(score <= 132, "score {score} cannot be reached");
    let mut record = DailyRecord::new(date);
    let mut remaining = score;
    for symptom in SYMPTOMS.iter() {
        if remaining == 0 {
            break;
        }
        let intensity = remaining.min(u32::from(MAX_INTENSITY));
        record = record.with_observation(symptom.key, intensity as i32);
        remaining -= intensity;
    }
    record
}

/// Records from `(days_ago, score)` pairs.
pub fn journal(entries: &[(i64, u32)]) -> Vec<DailyRecord> {
    entries
        .iter()
        .map(|&(ago, score)| scored(days_ago(ago), score))
        .collect()
}

/// `count` consecutive days ending today, all with `score`.
pub fn low_run(count: i64, score: u32) -> Vec<(i64, u32)> {
    (0..count).map(|ago| (ago, score)).collect()
}
