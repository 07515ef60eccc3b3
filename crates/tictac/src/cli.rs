//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tictac - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Name of the first player (X)
    #[arg(long = "player1", global = true)]
    pub player_one: Option<String>,

    /// Name of the second player (O)
    #[arg(long = "player2", global = true)]
    pub player_two: Option<String>,

    /// Front end to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Full-screen grid with cursor navigation
    Tui,

    /// Line-oriented text console
    Console,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_names_after_subcommand() {
        let cli = Cli::try_parse_from(["tictac", "console", "--player1", "Ada"]).unwrap();
        assert_eq!(cli.command, Command::Console);
        assert_eq!(cli.player_one.as_deref(), Some("Ada"));
        assert_eq!(cli.player_two, None);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["tictac"]).is_err());
    }
}
