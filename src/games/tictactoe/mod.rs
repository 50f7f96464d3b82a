//! Tic-tac-toe game core: board, rules and the turn state machine.

mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, Placement, Rejection};
pub use game::{GameState, GameStatus};
pub use position::Position;
pub use rules::{WINNING_LINES, WinningLine};
pub use types::{Board, Player, Square};
