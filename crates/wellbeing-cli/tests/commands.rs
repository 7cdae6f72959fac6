use std::path::Path;

use jiff::ToSpan;
use jiff::civil::{Date, date};
use wellbeing_cli::cli::{Command, JournalArgs};
use wellbeing_cli::commands::execute;
use wellbeing_cli::config::{OutputFormat, WellbeingConfig};

const TODAY: Date = date(2026, 6, 30);

fn write_journal(dir: &Path) -> std::path::PathBuf {
    let day = |ago: i64| TODAY.checked_sub(ago.days()).unwrap().to_string();
    let json = serde_json::json!({
        "patient_id": "6f1c2f8e-3b0a-4d7e-9a51-0c2d1f9b7a10",
        "records": [
            { "date": day(9), "observations": [
                { "id": "fatigue", "intensity": 6 },
                { "id": "headache", "intensity": 6 },
                { "id": "brain_fog", "intensity": 4 },
                { "id": "hiccups", "intensity": 3 }
            ]},
            { "date": day(1), "observations": [{ "id": "fatigue", "intensity": 4 }] },
            { "date": day(0), "observations": [{ "id": "fatigue", "intensity": 4 }] }
        ]
    });
    let path = dir.join("journal.json");
    std::fs::write(&path, serde_json::to_string(&json).unwrap()).unwrap();
    path
}

fn args(journal: &Path, format: OutputFormat) -> JournalArgs {
    JournalArgs {
        journal: Some(journal.to_path_buf()),
        date: Some(TODAY.to_string()),
        today: None,
        format: Some(format),
    }
}

#[test]
fn evaluate_prints_the_dashboard_payload() {
    let dir = tempfile::tempdir().unwrap();
    let journal = write_journal(dir.path());

    let output = execute(
        Command::Evaluate(args(&journal, OutputFormat::Json)),
        &WellbeingConfig::default(),
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["referenceR"], 16);
    assert_eq!(json["scoreToday"], 4);
    assert_eq!(json["label"], "75%");
    assert_eq!(json["status"], "stable");
    assert_eq!(json["statusHistory"].as_array().unwrap().len(), 3);
}

#[test]
fn in_progress_record_overrides_today() {
    let dir = tempfile::tempdir().unwrap();
    let journal = write_journal(dir.path());
    let today = dir.path().join("today.json");
    std::fs::write(
        &today,
        format!(r#"{{ "date": "{TODAY}", "observations": [{{ "id": "fatigue", "intensity": 2 }}] }}"#),
    )
    .unwrap();

    let mut journal_args = args(&journal, OutputFormat::Json);
    journal_args.today = Some(today);
    let output = execute(Command::Evaluate(journal_args), &WellbeingConfig::default()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["scoreToday"], 2);
    assert_eq!(json["label"], "100% (pending confirmation)");
    assert_eq!(json["status"], "cent_pourcent_atteint");
}

#[test]
fn history_can_be_filtered_and_collapsed() {
    let dir = tempfile::tempdir().unwrap();
    let journal = write_journal(dir.path());

    let output = execute(
        Command::History {
            journal: args(&journal, OutputFormat::Json),
            periods: true,
            status: Some("rechute_significative".to_string()),
        },
        &WellbeingConfig::default(),
    )
    .unwrap();
    let periods: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(periods.as_array().unwrap().len(), 1);
    assert_eq!(periods[0]["entries"], 1);

    let err = execute(
        Command::History {
            journal: args(&journal, OutputFormat::Text),
            periods: false,
            status: Some("better".to_string()),
        },
        &WellbeingConfig::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("unknown status"));
}

#[test]
fn explain_text_names_the_rule() {
    let dir = tempfile::tempdir().unwrap();
    let journal = write_journal(dir.path());

    let output = execute(
        Command::Explain(args(&journal, OutputFormat::Text)),
        &WellbeingConfig::default(),
    )
    .unwrap();
    assert!(output.contains("## Assessment for 2026-06-30"));
    assert!(output.contains("Rule: StableVariation"));
}

#[test]
fn journal_falls_back_to_config() {
    let dir = tempfile::tempdir().unwrap();
    let journal = write_journal(dir.path());
    let config = WellbeingConfig {
        default_journal: Some(journal),
        ..WellbeingConfig::default()
    };

    let mut journal_args = args(Path::new("unused"), OutputFormat::Text);
    journal_args.journal = None;
    let output = execute(Command::Evaluate(journal_args), &config).unwrap();
    assert!(output.contains("- Recovery: 75%"));

    let mut no_journal = args(Path::new("unused"), OutputFormat::Text);
    no_journal.journal = None;
    assert!(execute(Command::Evaluate(no_journal), &WellbeingConfig::default()).is_err());
}

#[test]
fn symptoms_lists_the_catalogue() {
    let output = execute(
        Command::Symptoms {
            format: Some(OutputFormat::Text),
        },
        &WellbeingConfig::default(),
    )
    .unwrap();
    assert_eq!(output.lines().count(), 22);
    assert!(output.starts_with("fatigue"));
}

#[test]
fn init_config_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = WellbeingConfig::default();

    execute(Command::InitConfig { path: Some(path.clone()) }, &config).unwrap();
    assert!(path.exists());
    assert!(execute(Command::InitConfig { path: Some(path) }, &config).is_err());
}

fn write_relapse_journal(dir: &Path) -> std::path::PathBuf {
    let day = |ago: i64| TODAY.checked_sub(ago.days()).unwrap().to_string();
    // Statuses: significant relapse, stable, mild relapse, stable.
    let json = serde_json::json!({
        "patient_id": "6f1c2f8e-3b0a-4d7e-9a51-0c2d1f9b7a10",
        "records": [
            { "date": day(9), "observations": [
                { "id": "fatigue", "intensity": 6 },
                { "id": "headache", "intensity": 6 },
                { "id": "brain_fog", "intensity": 4 }
            ]},
            { "date": day(2), "observations": [{ "id": "fatigue", "intensity": 4 }] },
            { "date": day(1), "observations": [
                { "id": "fatigue", "intensity": 6 },
                { "id": "headache", "intensity": 2 }
            ]},
            { "date": day(0), "observations": [{ "id": "fatigue", "intensity": 4 }] }
        ]
    });
    let path = dir.join("relapse.json");
    std::fs::write(&path, serde_json::to_string(&json).unwrap()).unwrap();
    path
}

#[test]
fn status_filter_keeps_periods_split_by_other_statuses() {
    let dir = tempfile::tempdir().unwrap();
    let journal = write_relapse_journal(dir.path());

    let output = execute(
        Command::History {
            journal: args(&journal, OutputFormat::Json),
            periods: true,
            status: Some("stable".to_string()),
        },
        &WellbeingConfig::default(),
    )
    .unwrap();
    let periods: serde_json::Value = serde_json::from_str(&output).unwrap();
    let periods = periods.as_array().unwrap();

    assert_eq!(periods.len(), 2);
    for period in periods {
        assert_eq!(period["status"], "stable");
        assert_eq!(period["entries"], 1);
        assert_eq!(period["start"], period["end"]);
    }
    assert_eq!(periods[0]["start"], TODAY.checked_sub(2.days()).unwrap().to_string());
    assert_eq!(periods[1]["start"], TODAY.to_string());

    let output = execute(
        Command::History {
            journal: args(&journal, OutputFormat::Text),
            periods: false,
            status: Some("rechute_legere".to_string()),
        },
        &WellbeingConfig::default(),
    )
    .unwrap();
    assert_eq!(output.lines().count(), 2);
    assert!(output.contains("rechute_legere"));
}
