//! Render plan types.

use crate::games::tictactoe::{GameStatus, Player, WinningLine};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Semantic colour role of a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    /// Coloured for a player.
    Player(Player),
    /// Neither player.
    Neutral,
}

/// Font weight of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emphasis {
    /// Between regular and bold (CSS weight 600).
    SemiBold,
    /// Bold.
    Bold,
}

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct CellView {
    index: usize,
    mark: Option<Player>,
    winning: bool,
}

impl CellView {
    /// Board index of the cell (0-8).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Mark in the cell, if any.
    pub fn mark(&self) -> Option<Player> {
        self.mark
    }

    /// True if the cell is part of the winning line.
    pub fn winning(&self) -> bool {
        self.winning
    }

    /// Text content of the cell.
    pub fn text(&self) -> &'static str {
        match self.mark {
            Some(Player::X) => "X",
            Some(Player::O) => "O",
            None => "",
        }
    }

    /// Space-separated class list for an HTML cell element.
    pub fn class_name(&self) -> String {
        let mut classes = vec!["cell"];
        match self.mark {
            Some(Player::X) => classes.push("x"),
            Some(Player::O) => classes.push("o"),
            None => {}
        }
        if self.winning {
            classes.push("winning");
        }
        classes.join(" ")
    }
}

/// The turn or result message.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct StatusLine {
    /// Message text.
    text: String,
    /// Colour role.
    tone: Tone,
    /// Font weight.
    emphasis: Emphasis,
}

impl StatusLine {
    /// Builds the message for a game status.
    pub fn for_status(status: &GameStatus) -> Self {
        match status {
            GameStatus::Turn(player) => Self {
                text: format!("Player {}'s Turn", player),
                tone: Tone::Player(*player),
                emphasis: Emphasis::SemiBold,
            },
            GameStatus::Won { winner, .. } => Self {
                text: format!("Player {} Wins! 🎉", winner),
                tone: Tone::Player(*winner),
                emphasis: Emphasis::Bold,
            },
            // Draws keep the weight of the turn message they replace.
            GameStatus::Draw => Self {
                text: "It's a Draw! 🤝".to_string(),
                tone: Tone::Neutral,
                emphasis: Emphasis::SemiBold,
            },
        }
    }
}

/// Everything a front end needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct RenderPlan {
    /// Cells in row-major order.
    cells: [CellView; 9],
    /// Turn or result message.
    status: StatusLine,
    /// Line to highlight once the game is won.
    winning_line: Option<WinningLine>,
}

impl std::fmt::Display for RenderPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            let symbols: Vec<String> = cells
                .iter()
                .map(|cell| match cell.mark {
                    Some(player) => player.to_string(),
                    None => (cell.index + 1).to_string(),
                })
                .collect();
            writeln!(f, " {} ", symbols.join(" | "))?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        write!(f, "\n{}", self.status.text)
    }
}
