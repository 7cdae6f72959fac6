mod common;

use common::{TODAY, days_ago, journal, low_run, scored};
use wellbeing_engine::history::{StatusSnapshot, replay_history, status_periods};
use wellbeing_engine::series::ScoreSeries;
use wellbeing_engine::{WellbeingEngine, WellbeingStatus};

#[test]
fn one_snapshot_per_distinct_date_up_to_evaluation() {
    let mut records = journal(&[(9, 40), (5, 30), (2, 20), (0, 10)]);
    records.push(scored(days_ago(5), 35));
    records.push(scored(TODAY.tomorrow().unwrap(), 80));

    let result = WellbeingEngine::default().evaluate(&records, TODAY, None);
    let dates: Vec<_> = result.status_history.iter().map(|s| s.date).collect();
    assert_eq!(dates, vec![days_ago(9), days_ago(5), days_ago(2), TODAY]);
}

#[test]
fn history_is_empty_without_records() {
    let result = WellbeingEngine::default().evaluate(&[], TODAY, None);
    assert!(result.status_history.is_empty());
}

#[test]
fn replay_never_uses_later_records() {
    let engine = WellbeingEngine::default();
    let early = journal(&[(20, 60), (19, 55), (18, 50), (14, 45)]);
    let mut full = early.clone();
    full.extend(journal(&[(10, 120), (5, 2), (0, 1)]));

    let partial = engine.evaluate(&early, days_ago(14), None);
    let complete = engine.evaluate(&full, TODAY, None);

    assert_eq!(
        &complete.status_history[..partial.status_history.len()],
        partial.status_history.as_slice()
    );
}

#[test]
fn first_day_of_a_journal_is_a_significant_relapse() {
    // The only day on record is also the worst one: 0% recovery.
    let history = replay_history(
        &WellbeingEngine::default(),
        &ScoreSeries::from_records(&journal(&[(3, 25)])),
        TODAY,
    );
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, WellbeingStatus::SignificantRelapse);
}

#[test]
fn reference_is_resolved_per_replayed_date() {
    // Day 10 is the worst day so far when replayed, later days see it.
    let mut entries = vec![(12, 30), (10, 100)];
    entries.extend(low_run(5, 1));
    let series = ScoreSeries::from_records(&journal(&entries));
    let history = replay_history(&WellbeingEngine::default(), &series, TODAY);

    assert_eq!(history[0].status, WellbeingStatus::SignificantRelapse);
    assert_eq!(history[1].status, WellbeingStatus::SignificantRelapse);
    assert!(
        history[2..]
            .iter()
            .all(|s| s.status == WellbeingStatus::RecoveryReached)
    );
}

#[test]
fn periods_collapse_runs() {
    let snapshot = |ago, status| StatusSnapshot {
        date: days_ago(ago),
        status,
    };
    let history = vec![
        snapshot(6, WellbeingStatus::SignificantRelapse),
        snapshot(5, WellbeingStatus::Stable),
        snapshot(3, WellbeingStatus::Stable),
        snapshot(2, WellbeingStatus::Improving),
        snapshot(0, WellbeingStatus::Stable),
    ];

    let periods = status_periods(&history);
    assert_eq!(periods.len(), 4);
    assert_eq!(periods[1].status, WellbeingStatus::Stable);
    assert_eq!(periods[1].start, days_ago(5));
    assert_eq!(periods[1].end, days_ago(3));
    assert_eq!(periods[1].entries, 2);
    assert_eq!(periods[3].start, periods[3].end);
    assert!(status_periods(&[]).is_empty());
}
