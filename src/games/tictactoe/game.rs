//! The tic-tac-toe state machine.
//!
//! [`GameState`] owns the board, whose turn it is, and whether the game is
//! still accepting moves. It is created once and reset in place; every
//! transition goes through [`GameState::place`] or [`GameState::reset`].
//!
//! ```text
//! InProgress(X) --place--> InProgress(O) --place--> ... --place--> Won(p) | Drawn
//!       ^                                                              |
//!       +------------------------------ reset -------------------------+
//! ```

use super::action::{Move, Placement, Rejection};
use super::position::Position;
use super::rules::{self, WinningLine};
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game, as consumed by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing and it is this player's turn.
    Turn(Player),
    /// Game ended in a win along `line`.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Turn(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move, or the winner once the game is won.
    current_player: Player,
    /// False once a win or draw is reached.
    active: bool,
    /// Line completed by the winning move.
    winning_line: Option<WinningLine>,
    /// Marks placed since the last reset.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            active: true,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the completed line once the game is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Returns the moves played since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark at `index` (0-8, row-major).
    ///
    /// Off-board indices, occupied squares and moves after the game has
    /// ended are ignored: the state is left exactly as it was and the
    /// returned [`Placement`] says why.
    ///
    /// After a mark is written the board is checked for a win first, then for
    /// a draw, so a move that fills the last square and completes a line is
    /// a win.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, index: usize) -> Placement {
        let Some(position) = Position::from_index(index) else {
            debug!(index, "Ignoring placement off the board");
            return Placement::Ignored(Rejection::OutOfBounds(index));
        };

        if !self.active {
            debug!(%position, "Ignoring placement after game end");
            return Placement::Ignored(Rejection::GameOver);
        }

        if !self.board.is_empty(position) {
            debug!(%position, "Ignoring placement on occupied square");
            return Placement::Ignored(Rejection::Occupied(position));
        }

        let player = self.current_player;
        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));

        if let Some(line) = rules::winning_line(&self.board, player) {
            self.active = false;
            self.winning_line = Some(line);
            info!(winner = %player, line = ?line.indices(), "Game won");
        } else if rules::is_full(&self.board) {
            self.active = false;
            info!("Game drawn");
        } else {
            self.current_player = player.opponent();
        }

        Placement::Placed(self.status())
    }

    /// Clears the board and starts over with X to move.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.active = true;
        self.winning_line = None;
        self.history.clear();
        info!("Game reset");
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match (self.active, self.winning_line) {
            (true, _) => GameStatus::Turn(self.current_player),
            (false, Some(line)) => GameStatus::Won {
                winner: self.current_player,
                line,
            },
            (false, None) => GameStatus::Draw,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> GameState {
        let mut game = GameState::new();
        for &index in moves {
            game.place(index);
        }
        game
    }

    #[test]
    fn test_new_game_is_x_turn() {
        let game = GameState::new();
        assert_eq!(game.status(), GameStatus::Turn(Player::X));
        assert!(game.is_active());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_place_flips_turn_and_records_move() {
        let mut game = GameState::new();
        let placement = game.place(4);
        assert_eq!(placement, Placement::Placed(GameStatus::Turn(Player::O)));
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.history(), &[Move::new(Player::X, Position::Center)]);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut game = play(&[3]);
        let before = game.clone();
        assert_eq!(
            game.place(3),
            Placement::Ignored(Rejection::Occupied(Position::MiddleLeft))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut game = GameState::new();
        assert_eq!(game.place(9), Placement::Ignored(Rejection::OutOfBounds(9)));
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_winner_keeps_current_player() {
        let game = play(&[0, 4, 1, 5, 2]);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
        assert!(!game.is_active());
    }

    #[test]
    fn test_move_after_win_is_ignored() {
        let mut game = play(&[0, 4, 1, 5, 2]);
        assert_eq!(game.place(8), Placement::Ignored(Rejection::GameOver));
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut game = play(&[0, 4, 1]);
        game.reset();
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_status_helpers() {
        assert!(!GameStatus::Turn(Player::O).is_terminal());
        assert!(GameStatus::Draw.is_terminal());
        assert_eq!(GameStatus::Draw.winner(), None);
        let won = play(&[0, 4, 1, 5, 2]).status();
        assert!(won.is_terminal());
        assert_eq!(won.winner(), Some(Player::X));
    }
}
