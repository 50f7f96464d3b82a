//! Headless replay of a move list.

use crate::games::tictactoe::{GameState, Placement, Position};
use tracing::{debug, instrument, warn};

/// Parses a move as an index or, failing that, a position label.
///
/// Numbers are returned as-is, even off the board, so that the game's own
/// handling of out-of-range indices applies.
pub fn parse_move(s: &str) -> Option<usize> {
    let s = s.trim();
    s.parse::<usize>()
        .ok()
        .or_else(|| Position::from_label_or_number(s).map(Position::to_index))
}

/// Plays `moves` on a fresh game and returns the final state.
///
/// Unparseable and ignored moves are logged and skipped.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay<S: AsRef<str>>(moves: &[S]) -> GameState {
    let mut game = GameState::new();
    for raw in moves {
        let raw = raw.as_ref();
        let Some(index) = parse_move(raw) else {
            warn!(input = raw, "Skipping unrecognised move");
            continue;
        };
        match game.place(index) {
            Placement::Placed(status) => debug!(index, ?status, "Move applied"),
            Placement::Ignored(reason) => warn!(index, %reason, "Move ignored"),
        }
    }
    game
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Player};

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("4"), Some(4));
        assert_eq!(parse_move("12"), Some(12));
        assert_eq!(parse_move("bottom-right"), Some(8));
        assert_eq!(parse_move("nowhere"), None);
    }

    #[test]
    fn test_replay_mixes_labels_and_indices() {
        let game = replay(&["top-left", "4", "1", "middle-right", "2"]);
        assert_eq!(game.status().winner(), Some(Player::X));
    }

    #[test]
    fn test_replay_skips_bad_input() {
        let game = replay(&["nowhere", "3", "3", "42"]);
        assert_eq!(game.status(), GameStatus::Turn(Player::O));
        assert_eq!(game.history().len(), 1);
    }
}
