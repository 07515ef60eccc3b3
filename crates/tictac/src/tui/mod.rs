//! Full-screen terminal front end.

mod app;
mod input;
mod ui;

pub use app::{App, Flow, NameField, Screen};
pub use input::move_cursor;
pub use ui::draw;

use crate::config::TictacConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the terminal UI until the player quits.
///
/// The terminal is restored even when the event loop fails.
#[instrument(skip_all)]
pub fn run_tui(config: &TictacConfig) -> Result<()> {
    info!("Starting TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop failed");
    }
    info!("TUI closed");
    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release on some platforms).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key) == Flow::Quit {
                return Ok(());
            }
        }
    }
}
