//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A [`Move`] records a mark that
//! was actually placed; a [`Placement`] tells the caller what a call to
//! [`GameState::place`](super::GameState::place) did.

use super::{GameStatus, Player, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a placement was ignored.
///
/// Ignored placements are not errors: the board is left untouched and the
/// game carries on as if the input never happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Rejection {
    /// The index is outside 0-8.
    #[display("Index {} is off the board", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Outcome of a call to `place`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// The mark was written; carries the status after evaluation.
    Placed(GameStatus),
    /// The call was a no-op.
    Ignored(Rejection),
}

impl Placement {
    /// Returns true if the board changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed(_))
    }
}
