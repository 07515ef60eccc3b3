//! Stateless rendering of the application.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_engine::{Board, Marker, Position, Square, Status, winning_line};

use super::app::{App, NameField, Screen};
use crate::banner::result_banner;

/// Draws whichever screen the app is on.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::Setup => draw_setup(frame, chunks[1], app),
        Screen::Playing => draw_game(frame, chunks[1], app),
    }

    // The name form never sits on a live game, whatever phase the engine is in.
    let status_text = match app.screen() {
        Screen::Setup => Status::NotStarted.to_string(),
        Screen::Playing => app.engine().status().to_string(),
    };
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help_text = match app.screen() {
        Screen::Setup => "Type names | Tab: Switch | Enter: Start | Esc: Quit",
        Screen::Playing if app.engine().is_over() => {
            "Press 'r' to play again | n: Rename | q: Quit"
        }
        Screen::Playing => "←↑↓→: Move | Enter/1-9: Play | r: Restart | n: Rename | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_setup(frame: &mut Frame, area: Rect, app: &App) {
    let form = center_rect(area, 40, 6);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(form);

    for (field, row) in [NameField::One, NameField::Two].into_iter().zip(rows.iter()) {
        let (label, marker, value) = match field {
            NameField::One => ("Player 1", Marker::X, &app.names()[0]),
            NameField::Two => ("Player 2", Marker::O, &app.names()[1]),
        };
        let style = if *app.focus() == field {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(value.as_str()).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ({})", label, marker)),
        );
        frame.render_widget(input, *row);
    }
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let banner = result_banner(app.engine());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(1)])
        .split(area);

    let highlight = winning_line(app.engine().board())
        .map(|(_, line)| line.to_vec())
        .unwrap_or_default();
    let cursor = if app.engine().is_over() {
        None
    } else {
        Some(*app.cursor())
    };
    draw_board(frame, chunks[0], app.engine().board(), cursor, &highlight);

    let notice = match (banner, app.message()) {
        (Some(banner), _) => Some(
            Paragraph::new(banner)
                .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        ),
        (None, Some(message)) => {
            Some(Paragraph::new(message.as_str()).style(Style::default().fg(Color::Red)))
        }
        (None, None) => None,
    };
    if let Some(notice) = notice {
        frame.render_widget(notice.alignment(Alignment::Center), chunks[1]);
    }
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    highlight: &[Position],
) {
    let board_area = center_rect(area, 17, 5);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    for (i, row) in Position::ALL.chunks(3).enumerate() {
        let mut spans = Vec::with_capacity(5);
        for (j, pos) in row.iter().enumerate() {
            if j > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            spans.push(cell_span(board, *pos, cursor == Some(*pos), highlight.contains(pos)));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            rows[i * 2],
        );
        if i < 2 {
            let sep = Paragraph::new("─────┼─────┼─────")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(sep, rows[i * 2 + 1]);
        }
    }
}

fn cell_span(board: &Board, pos: Position, selected: bool, winning: bool) -> Span<'static> {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (
            format!("  {}  ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Marker::X) => (
            "  X  ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Marker::O) => (
            "  O  ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };
    Span::styled(symbol, style)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
