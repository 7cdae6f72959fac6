use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use wellbeing_cli::cli::Cli;
use wellbeing_cli::{commands, config};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for command output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = config::load_config(cli.config.as_deref())?;
    let output = commands::execute(cli.command, &config)?;
    println!("{output}");
    Ok(())
}
