mod common;

use common::{TODAY, scored};
use wellbeing_core::models::record::DailyRecord;
use wellbeing_core::symptoms::{MAX_SCORE, SYMPTOMS};
use wellbeing_engine::score::daily_score;

#[test]
fn missing_record_scores_zero() {
    assert_eq!(daily_score(None), 0);
    assert_eq!(daily_score(Some(&DailyRecord::new(TODAY))), 0);
}

#[test]
fn sums_canonical_intensities() {
    let record = DailyRecord::new(TODAY)
        .with_observation("fatigue", 4)
        .with_observation("headache", 3)
        .with_observation("low_mood", 1);
    assert_eq!(daily_score(Some(&record)), 8);
}

#[test]
fn unknown_symptoms_are_not_counted() {
    let record = DailyRecord::new(TODAY)
        .with_observation("fatigue", 2)
        .with_observation("hiccups", 6)
        .with_observation("FATIGUE", 6);
    assert_eq!(daily_score(Some(&record)), 2);
}

#[test]
fn first_duplicate_observation_wins() {
    let record = DailyRecord::new(TODAY)
        .with_observation("cough", 1)
        .with_observation("cough", 5);
    assert_eq!(daily_score(Some(&record)), 1);
}

#[test]
fn score_stays_within_bounds_for_out_of_range_input() {
    let mut worst = DailyRecord::new(TODAY);
    let mut negative = DailyRecord::new(TODAY);
    for symptom in SYMPTOMS.iter() {
        worst = worst.with_observation(symptom.key, 250);
        negative = negative.with_observation(symptom.key, -9);
    }
    assert_eq!(daily_score(Some(&worst)), MAX_SCORE);
    assert_eq!(daily_score(Some(&negative)), 0);
}

#[test]
fn helper_builds_exact_scores() {
    for score in [0, 1, 6, 7, 59, 100, 132] {
        assert_eq!(daily_score(Some(&scored(TODAY, score))), score);
    }
}
