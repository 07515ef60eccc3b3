//! Line-oriented text front end.

mod command;

pub use command::ConsoleCommand;

use crate::banner::result_banner;
use crate::config::TictacConfig;
use anyhow::Result;
use std::io::{BufRead, Write};
use tictac_engine::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, Engine, MoveError, Placement};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  1-9          play the numbered square
  center, ...  play a square by name (top-left .. bottom-right)
  r, restart   start a new game with the same players
  h, help      show this list
  q, quit      leave";

/// A console game session over any reader/writer pair.
pub struct ConsoleSession<R, W> {
    engine: Engine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Creates a session around an engine.
    pub fn new(engine: Engine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// The engine being played.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until the user quits or input runs out.
    ///
    /// Names missing from `config` are asked for first.
    #[instrument(skip_all)]
    pub fn run(&mut self, config: &TictacConfig) -> Result<()> {
        let Some(name1) = self.name_for(config.player_one(), 1, DEFAULT_PLAYER_ONE)? else {
            return Ok(());
        };
        let Some(name2) = self.name_for(config.player_two(), 2, DEFAULT_PLAYER_TWO)? else {
            return Ok(());
        };
        self.engine.start_game(&name1, &name2);
        writeln!(self.output, "Type h for help.")?;

        let mut needs_render = true;
        loop {
            if needs_render {
                self.render()?;
                needs_render = false;
            }

            let Some(line) = self.prompt("> ")? else {
                info!("Console input closed");
                writeln!(self.output)?;
                return Ok(());
            };
            let Some(command) = ConsoleCommand::parse(&line) else {
                continue;
            };
            debug!(?command, "Console command");

            match command {
                ConsoleCommand::Move(index) => match self.engine.play_move(index) {
                    Ok(placement) => {
                        if !matches!(placement, Placement::Continue { .. })
                            && let Some(banner) = result_banner(&self.engine)
                        {
                            writeln!(self.output, "{}", banner)?;
                        }
                        needs_render = true;
                    }
                    Err(e) => writeln!(self.output, "{}", diagnostic(&e))?,
                },
                ConsoleCommand::Restart => {
                    self.engine.reset_game();
                    writeln!(self.output, "New game.")?;
                    needs_render = true;
                }
                ConsoleCommand::Help => writeln!(self.output, "{}", HELP)?,
                ConsoleCommand::Quit => {
                    writeln!(self.output, "Goodbye.")?;
                    return Ok(());
                }
                ConsoleCommand::Unknown(word) => {
                    writeln!(self.output, "Unrecognised input '{}'. Type h for help.", word)?
                }
            }
        }
    }

    /// Uses the configured name or asks for one; `None` on end of input.
    fn name_for(
        &mut self,
        configured: &Option<String>,
        seat: usize,
        fallback: &str,
    ) -> Result<Option<String>> {
        if let Some(name) = configured {
            return Ok(Some(name.clone()));
        }
        self.prompt(&format!("Name for player {} [{}]: ", seat, fallback))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn render(&mut self) -> Result<()> {
        writeln!(self.output)?;
        for row in self.engine.board().to_string().lines() {
            writeln!(self.output, "  {}", row)?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.engine.status())?;
        if self.engine.is_over() {
            writeln!(self.output, "Type r to play again or q to quit.")?;
        }
        Ok(())
    }
}

/// User-facing explanation of a rejected move.
fn diagnostic(error: &MoveError) -> String {
    match error {
        MoveError::InvalidIndex(_) => "Pick a square from 1 to 9.".to_string(),
        MoveError::CellOccupied(pos) => format!("{} is already taken. Try another square.", pos),
        MoveError::IllegalMoveTiming(_) => {
            "The game is over. Type r to play again or q to quit.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_engine::Position;

    #[test]
    fn test_diagnostics() {
        assert_eq!(
            diagnostic(&MoveError::InvalidIndex(11)),
            "Pick a square from 1 to 9."
        );
        assert_eq!(
            diagnostic(&MoveError::CellOccupied(Position::Center)),
            "Center is already taken. Try another square."
        );
    }
}
