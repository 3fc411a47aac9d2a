//! tictactoe_slots - play one match of tic-tac-toe at the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_slots::{MatchConfig, MatchController, MatchOutcome, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => MatchConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => MatchConfig::default(),
    };
    let config = config
        .with_overrides(cli.player_o, cli.player_x, cli.log_filter)
        .context("Invalid command-line options")?;

    init_tracing(&config)?;
    info!(config = ?config, "Starting match");

    let controller =
        MatchController::setup(Terminal::new(), &config).context("Failed to set up players")?;
    let outcome = controller.run().context("Match aborted")?;

    match outcome {
        MatchOutcome::Won { winner, line } => {
            info!(winner = %winner.name(), %line, "Exiting after win")
        }
        MatchOutcome::Draw => info!("Exiting after draw"),
    }
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(config: &MatchConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.effective_log_filter())
            .context("Invalid log filter")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
