//! Presentation-neutral rendering of a game.
//!
//! [`render`] turns a [`GameStatus`] and a [`Board`] into a [`RenderPlan`]:
//! what each cell shows, which cells to highlight, and the status line.
//! Front ends paint the plan with whatever technology they use and map its
//! [`Tone`]s to colours through a [`Theme`].

mod plan;
mod theme;

pub use plan::{CellView, Emphasis, RenderPlan, StatusLine, Tone};
pub use theme::Theme;

use crate::games::tictactoe::{Board, GameStatus, Position};
use tracing::instrument;

/// Builds the render plan for a board and its status.
#[instrument(skip(board))]
pub fn render(status: &GameStatus, board: &Board) -> RenderPlan {
    let line = match status {
        GameStatus::Won { line, .. } => Some(*line),
        _ => None,
    };

    let cells = Position::ALL.map(|pos| {
        let index = pos.to_index();
        CellView::new(
            index,
            board.get(pos).player(),
            line.is_some_and(|l| l.contains(index)),
        )
    });

    RenderPlan::new(cells, StatusLine::for_status(status), line)
}
