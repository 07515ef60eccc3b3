//! Parsing of console input lines.

use tictac_engine::Position;

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Play at this board index. Out-of-range indices are passed through
    /// so the engine can reject them.
    Move(usize),
    /// Start a new game with the same names.
    Restart,
    /// End the session.
    Quit,
    /// Show the command list.
    Help,
    /// Input that matched nothing.
    Unknown(String),
}

impl ConsoleCommand {
    /// Parses a line; `None` for a blank line.
    ///
    /// Squares are numbered 1-9 on screen, so `"1"` maps to index 0.
    /// Position labels such as `center` or `top-left` are also accepted.
    pub fn parse(line: &str) -> Option<Self> {
        let word = line.trim();
        if word.is_empty() {
            return None;
        }

        let command = match word.to_lowercase().as_str() {
            "q" | "quit" | "exit" => ConsoleCommand::Quit,
            "r" | "restart" => ConsoleCommand::Restart,
            "h" | "help" | "?" => ConsoleCommand::Help,
            _ => match word.parse::<usize>() {
                Ok(n) if n >= 1 => ConsoleCommand::Move(n - 1),
                Ok(_) => ConsoleCommand::Unknown(word.to_string()),
                Err(_) => match Position::from_label_or_number(word) {
                    Some(pos) => ConsoleCommand::Move(pos.to_index()),
                    None => ConsoleCommand::Unknown(word.to_string()),
                },
            },
        };
        Some(command)
    }
}
