use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "wellbeing",
    version,
    about = "Recovery percentage and trajectory status from a symptom journal"
)]
pub struct Cli {
    /// Config file to use instead of the one in the user config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recovery, status and status history for one date.
    Evaluate(JournalArgs),
    /// Every signal behind one date's status.
    Explain(JournalArgs),
    /// Status history, optionally collapsed into periods.
    History {
        #[command(flatten)]
        journal: JournalArgs,

        /// Collapse consecutive identical statuses.
        #[arg(long)]
        periods: bool,

        /// Only keep entries with this status key (e.g. `rechute_legere`).
        #[arg(long)]
        status: Option<String>,
    },
    /// List the canonical symptoms.
    Symptoms {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Write a config file holding the default settings.
    InitConfig {
        /// Destination; defaults to the user config directory.
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct JournalArgs {
    /// Journal JSON file; falls back to `default_journal` from the config.
    #[arg(short, long)]
    pub journal: Option<PathBuf>,

    /// Evaluation date (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Today's in-progress record as JSON, if not yet in the journal.
    #[arg(long)]
    pub today: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}
