//! Command-line interface for tictactoe_slots.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe for two players at one terminal.
///
/// Moves are typed as a row letter (a, b, c) followed by a column
/// letter (r, s, t), e.g. `bs` for the centre.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_slots")]
#[command(about = "Two-player terminal tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML match config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of the `o` player (skips the name prompt)
    #[arg(long)]
    pub player_o: Option<String>,

    /// Name of the `x` player (skips the name prompt)
    #[arg(long)]
    pub player_x: Option<String>,

    /// Tracing filter used when RUST_LOG is unset (logs go to stderr)
    #[arg(long)]
    pub log_filter: Option<String>,
}
