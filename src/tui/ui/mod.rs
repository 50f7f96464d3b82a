//! UI rendering using ratatui.

mod board;

use super::app::App;
use crate::render::{Emphasis, Tone};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::str::FromStr;

pub use board::render_board;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let plan = app.plan();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Strictly Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_board(f, chunks[1], &plan, app.cursor(), app.theme());

    let line = plan.status();
    let mut style = Style::default().fg(tone_color(app.theme(), *line.tone()));
    if *line.emphasis() == Emphasis::Bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    let status = Paragraph::new(line.text().as_str())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("1-9 or arrows + Enter: move | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

/// Converts a theme colour to a terminal colour.
pub(crate) fn tone_color(theme: &crate::render::Theme, tone: Tone) -> Color {
    Color::from_str(theme.color(tone)).unwrap_or(Color::Reset)
}
