//! Plain-text renderings for the terminal.

use wellbeing_core::symptoms::SYMPTOMS;
use wellbeing_engine::history::{StatusPeriod, StatusSnapshot};
use wellbeing_engine::{Assessment, WellbeingResult};

pub fn result_text(result: &WellbeingResult) -> String {
    let mut output = String::from("## Wellbeing\n\n");
    output.push_str(&format!("- Recovery: {}\n", result.label));
    output.push_str(&format!(
        "- Status: {} ({})\n",
        result.status.description(),
        result.status
    ));
    output.push_str(&format!("- Score today: {}\n", result.score_today));
    output.push_str(&format!("- Worst day (R): {}\n", result.reference_r));
    output.push('\n');
    output.push_str(&history_text(&result.status_history));
    output
}

pub fn assessment_text(assessment: &Assessment) -> String {
    let mut output = format!("## Assessment for {}\n\n", assessment.date);
    output.push_str(&format!("- Score today: {}\n", assessment.score_today));
    output.push_str(&format!("- Worst day (R): {}\n", assessment.reference));
    output.push_str(&format!("- Recovery: {}\n", assessment.recovery.label));
    if let Some(confirmation) = &assessment.recovery.confirmation {
        let veto = if confirmation.has_notable_aggravation {
            ", vetoed by an earlier aggravation"
        } else {
            ""
        };
        output.push_str(&format!(
            "- Low-score streak: {} days{veto}\n",
            confirmation.low_streak_days
        ));
    }
    output.push_str(&format!("- Change over a week: {:+}\n", assessment.variation));
    match assessment.trend.slope {
        Some(slope) => output.push_str(&format!("- Weekly trend: {slope:+.2} points/day\n")),
        None => output.push_str("- Weekly trend: not enough entries\n"),
    }
    let rising = if assessment.trend.worsening { "yes" } else { "no" };
    output.push_str(&format!("- Rising over the last days: {rising}\n"));
    output.push_str(&format!("- Rule: {:?}\n", assessment.rule));
    output.push_str(&format!(
        "- Status: {} ({})\n",
        assessment.status.description(),
        assessment.status
    ));
    output
}

pub fn history_text(history: &[StatusSnapshot]) -> String {
    if history.is_empty() {
        return "No journal entries.\n".to_string();
    }
    let mut output = String::from("### History\n");
    for snapshot in history {
        output.push_str(&format!("{}  {}\n", snapshot.date, snapshot.status));
    }
    output
}

pub fn periods_text(periods: &[StatusPeriod]) -> String {
    if periods.is_empty() {
        return "No journal entries.\n".to_string();
    }
    let mut output = String::from("### Periods\n");
    for period in periods {
        output.push_str(&format!(
            "{} → {}  {} ({} entries)\n",
            period.start,
            period.end,
            period.status.description(),
            period.entries
        ));
    }
    output
}

pub fn symptoms_text() -> String {
    let mut output = String::new();
    for symptom in &SYMPTOMS {
        output.push_str(&format!(
            "{:<24} {:<26} {:?}\n",
            symptom.key, symptom.name, symptom.category
        ));
    }
    output
}
