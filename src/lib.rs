//! Strictly Tic-Tac-Toe - a two-player game with a pure core
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe board, rules and [`GameState`] machine
//! - **Render**: [`render`] turns a status and board into a [`RenderPlan`]
//! - **TUI**: a terminal front end that feeds key presses to the game
//! - **Replay**: headless play from a list of moves
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameState, Player, render};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 5, 2] {
//!     game.place(index);
//! }
//! assert_eq!(game.status().winner(), Some(Player::X));
//!
//! let plan = render(&game.status(), game.board());
//! assert_eq!(plan.status().text(), "Player X Wins! 🎉");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod games;
mod render;
mod replay;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, LoggingSettings, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameState, GameStatus, Move, Placement, Player, Position, Rejection, Square,
    WINNING_LINES, WinningLine, rules,
};

// Crate-level exports - Rendering
pub use render::{CellView, Emphasis, RenderPlan, StatusLine, Theme, Tone, render};

// Crate-level exports - Front ends
pub use replay::{parse_move, replay};
pub use tui::{Action, App, Direction, action_for, move_cursor, run_tui};
