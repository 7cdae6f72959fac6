use std::path::{Path, PathBuf};

use jiff::civil::Date;
use wellbeing_core::models::journal::Journal;
use wellbeing_core::models::record::{DailyRecord, parse_date};
use wellbeing_core::validation::validate_record;
use wellbeing_engine::history::status_periods;
use wellbeing_engine::{WellbeingEngine, WellbeingStatus};

use crate::cli::{Command, JournalArgs};
use crate::config::{self, OutputFormat, WellbeingConfig};
use crate::render;

/// Run one command and return what should be printed.
pub fn execute(command: Command, config: &WellbeingConfig) -> eyre::Result<String> {
    match command {
        Command::Evaluate(args) => {
            let input = EvaluationInput::load(&args, config)?;
            let engine = WellbeingEngine::new(config.engine.clone())?;
            let result = engine.evaluate(&input.journal.records, input.date, input.today.as_ref());
            match output_format(&args, config) {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&result)?),
                OutputFormat::Text => Ok(render::result_text(&result)),
            }
        }
        Command::Explain(args) => {
            let input = EvaluationInput::load(&args, config)?;
            let engine = WellbeingEngine::new(config.engine.clone())?;
            let assessment =
                engine.explain(&input.journal.records, input.date, input.today.as_ref());
            match output_format(&args, config) {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&assessment)?),
                OutputFormat::Text => Ok(render::assessment_text(&assessment)),
            }
        }
        Command::History {
            journal,
            periods,
            status,
        } => {
            let filter = status
                .map(|key| {
                    WellbeingStatus::from_key(&key)
                        .ok_or_else(|| eyre::eyre!("unknown status '{key}'"))
                })
                .transpose()?;

            let input = EvaluationInput::load(&journal, config)?;
            let engine = WellbeingEngine::new(config.engine.clone())?;
            let history = engine
                .evaluate(&input.journal.records, input.date, input.today.as_ref())
                .status_history;
            let keep = |status: WellbeingStatus| filter.is_none_or(|wanted| status == wanted);

            let output = output_format(&journal, config);
            if periods {
                // Collapse before filtering so runs never span other statuses.
                let periods: Vec<_> = status_periods(&history)
                    .into_iter()
                    .filter(|p| keep(p.status))
                    .collect();
                match output {
                    OutputFormat::Json => Ok(serde_json::to_string_pretty(&periods)?),
                    OutputFormat::Text => Ok(render::periods_text(&periods)),
                }
            } else {
                let history: Vec<_> = history.into_iter().filter(|s| keep(s.status)).collect();
                match output {
                    OutputFormat::Json => Ok(serde_json::to_string_pretty(&history)?),
                    OutputFormat::Text => Ok(render::history_text(&history)),
                }
            }
        }
        Command::Symptoms { format } => match format.unwrap_or(config.output) {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &wellbeing_core::symptoms::SYMPTOMS,
            )?),
            OutputFormat::Text => Ok(render::symptoms_text()),
        },
        Command::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => config::config_path()?,
            };
            if path.exists() {
                return Err(eyre::eyre!("{} already exists", path.display()));
            }
            config::save_config(&WellbeingConfig::default(), &path)?;
            Ok(format!("wrote {}", path.display()))
        }
    }
}

fn output_format(args: &JournalArgs, config: &WellbeingConfig) -> OutputFormat {
    args.format.unwrap_or(config.output)
}

struct EvaluationInput {
    journal: Journal,
    date: Date,
    today: Option<DailyRecord>,
}

impl EvaluationInput {
    fn load(args: &JournalArgs, config: &WellbeingConfig) -> eyre::Result<Self> {
        let journal_path: PathBuf = args
            .journal
            .clone()
            .or_else(|| config.default_journal.clone())
            .ok_or_else(|| {
                eyre::eyre!("no journal given: pass --journal or set default_journal in the config")
            })?;
        let journal = load_journal(&journal_path)?;

        let date = match &args.date {
            Some(value) => parse_date(value)?,
            None => jiff::Zoned::now().date(),
        };

        let today = match &args.today {
            Some(path) => Some(load_record(path)?),
            None => None,
        };

        for record in journal.records.iter().chain(today.iter()) {
            for issue in validate_record(record) {
                tracing::warn!(kind = ?issue.kind, symptom = %issue.symptom_id, "{issue}");
            }
        }

        Ok(Self {
            journal,
            date,
            today,
        })
    }
}

pub fn load_journal(path: &Path) -> eyre::Result<Journal> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read journal at {}: {e}", path.display()))?;
    let journal = Journal::from_json(&contents)?;
    tracing::info!(
        patient_id = %journal.patient_id,
        records = journal.records.len(),
        path = %path.display(),
        "journal loaded"
    );
    Ok(journal)
}

fn load_record(path: &Path) -> eyre::Result<DailyRecord> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read record at {}: {e}", path.display()))?;
    Ok(serde_json::from_str(&contents)?)
}
