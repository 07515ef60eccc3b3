//! Tictac - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use tictac::{Cli, Command, ConsoleSession, TictacConfig, init_logging, run_tui};
use tictac_engine::Engine;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TictacConfig::load(cli.config.as_deref())?
        .with_overrides(cli.player_one.clone(), cli.player_two.clone());
    init_logging(&config)?;
    info!(command = ?cli.command, "Starting tictac");

    match cli.command {
        Command::Tui => run_tui(&config),
        Command::Console => run_console(&config),
    }
}

/// Plays on stdin/stdout.
fn run_console(config: &TictacConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = ConsoleSession::new(Engine::new(), stdin.lock(), stdout.lock());
    session.run(config)
}
