//! Application state and key handling.

use super::input::move_cursor;
use crate::config::TictacConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use tictac_engine::{Engine, Position};
use tracing::{debug, info, instrument};

/// Longest name the setup screen accepts.
const MAX_NAME_LEN: usize = 20;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Name entry before a game.
    Setup,
    /// The board.
    Playing,
}

/// Name input that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// First player (X).
    One,
    /// Second player (O).
    Two,
}

impl NameField {
    /// The other field.
    pub fn toggle(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    engine: Engine,
    screen: Screen,
    names: [String; 2],
    focus: NameField,
    cursor: Position,
    message: Option<String>,
}

impl App {
    /// Creates the application on the setup screen, names prefilled from `config`.
    #[instrument(skip(config))]
    pub fn new(config: &TictacConfig) -> Self {
        let names = [
            config.player_one().clone().unwrap_or_default(),
            config.player_two().clone().unwrap_or_default(),
        ];
        Self {
            engine: Engine::with_names(&names[0], &names[1]),
            screen: Screen::Setup,
            names,
            focus: NameField::One,
            cursor: Position::Center,
            message: None,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }
        match self.screen {
            Screen::Setup => self.handle_setup_key(key),
            Screen::Playing => self.handle_play_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) -> Flow {
        let name = &mut self.names[self.focus.index()];
        match key.code {
            KeyCode::Char(c) => {
                if name.chars().count() < MAX_NAME_LEN {
                    name.push(c);
                }
            }
            KeyCode::Backspace => {
                name.pop();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Enter => self.start(),
            KeyCode::Esc => return Flow::Quit,
            _ => {}
        }
        Flow::Continue
    }

    fn handle_play_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.play(index);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char('n') | KeyCode::Char('N') => {
                debug!("Back to setup");
                self.screen = Screen::Setup;
                self.message = None;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
            _ => {}
        }
        Flow::Continue
    }

    /// Applies the typed names and starts a game.
    fn start(&mut self) {
        self.engine.start_game(&self.names[0], &self.names[1]);
        self.names = self.engine.players().clone().map(|p| p.name().clone());
        self.screen = Screen::Playing;
        self.cursor = Position::Center;
        self.message = None;
        info!(names = ?self.names, "Game started from setup screen");
    }

    /// Clears the board, keeping the names.
    fn restart(&mut self) {
        self.engine.reset_game();
        self.cursor = Position::Center;
        self.message = None;
    }

    fn play(&mut self, index: usize) {
        self.message = match self.engine.play_move(index) {
            Ok(placement) => {
                debug!(?placement, "Move played from TUI");
                None
            }
            Err(e) => Some(e.to_string()),
        };
    }
}
