//! Application state and logic.

use super::input::{self, Action};
use crate::games::tictactoe::{GameState, Placement, Position};
use crate::render::{RenderPlan, Theme, render};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    theme: Theme,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(theme))]
    pub fn new(theme: Theme) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            theme,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the colour theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Builds the render plan for the current game.
    pub fn plan(&self) -> RenderPlan {
        render(&self.game.status(), self.game.board())
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Place(index) => self.place(index),
            Action::PlaceAtCursor => self.place(self.cursor.to_index()),
            Action::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Action::Restart => self.restart(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn place(&mut self, index: usize) {
        if let Placement::Ignored(reason) = self.game.place(index) {
            debug!(index, %reason, "Move ignored");
        } else if let Some(position) = Position::from_index(index) {
            self.cursor = position;
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
    }
}
