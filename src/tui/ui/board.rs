//! Tic-tac-toe board rendering.

use super::tone_color;
use crate::games::tictactoe::Position;
use crate::render::{CellView, RenderPlan, Theme, Tone};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

/// Renders the tic-tac-toe board.
pub fn render_board(f: &mut Frame, area: Rect, plan: &RenderPlan, cursor: Position, theme: &Theme) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, cells) in plan.cells().chunks(3).enumerate() {
        render_row(f, rows[row * 2], cells, cursor, theme);
        if row < 2 {
            render_separator(f, rows[row * 2 + 1]);
        }
    }
}

fn render_row(f: &mut Frame, area: Rect, cells: &[CellView], cursor: Position, theme: &Theme) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (i, cell) in cells.iter().enumerate() {
        render_square(f, cols[i * 2], cell, cursor, theme);
        if i < 2 {
            render_vertical_sep(f, cols[i * 2 + 1]);
        }
    }
}

fn render_square(f: &mut Frame, area: Rect, cell: &CellView, cursor: Position, theme: &Theme) {
    let (text, mut style) = match cell.mark() {
        None => (
            format!("{}", cell.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Some(player) => (
            player.to_string(),
            Style::default()
                .fg(tone_color(theme, Tone::Player(player)))
                .add_modifier(Modifier::BOLD),
        ),
    };
    if cell.winning() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    if cursor.to_index() == cell.index() {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    // Vertically centre the mark in its 3-line row.
    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
