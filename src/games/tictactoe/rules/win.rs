//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three board indices that win the game when marked by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    /// Returns the three indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// Checks whether the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Checks whether all three squares hold `player`'s mark.
    pub fn is_marked_by(&self, board: &Board, player: Player) -> bool {
        self.0
            .iter()
            .all(|&i| board.get_index(i) == Some(Square::Occupied(player)))
    }
}

/// All eight winning lines: rows, then columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    // Columns
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    // Diagonals
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

/// Returns the first line fully marked by `player`, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    WINNING_LINES
        .iter()
        .copied()
        .find(|line| line.is_marked_by(board, player))
}

/// Checks if there is a winner on the board.
///
/// Returns the player and the first line they hold three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    WINNING_LINES.iter().copied().find_map(|line| {
        let [a, ..] = line.indices();
        let player = board.get_index(a)?.player()?;
        line.is_marked_by(board, player).then_some((player, line))
    })
}

#[cfg(test)]
mod tests {
    use super::super::super::Position;
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board, Player::X), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(
            check_winner(&board),
            Some((Player::X, WinningLine([0, 1, 2])))
        );
        assert_eq!(winning_line(&board, Player::O), None);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        let line = winning_line(&board, Player::O).expect("diagonal win");
        assert_eq!(line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_table_order_is_reported() {
        // X holds both the top row and the left column.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(
            winning_line(&board, Player::X),
            Some(WinningLine([0, 1, 2]))
        );
    }

    #[test]
    fn test_every_index_lies_on_a_line() {
        for index in 0..9 {
            assert!(WINNING_LINES.iter().any(|line| line.contains(index)));
        }
        assert_eq!(WINNING_LINES.iter().filter(|l| l.contains(4)).count(), 4);
    }
}
