//! Command-line interface for strictly_tictactoe.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Tic-Tac-Toe - two players, one board
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Play in the terminal
    #[default]
    Tui,

    /// Apply a sequence of moves and print the result
    Replay {
        /// Cells to play in order: an index 0-8 or a label such as "center"
        moves: Vec<String>,

        /// Print the render plan as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["strictly_tictactoe"]).expect("parses");
        assert_eq!(cli.command.unwrap_or_default(), Command::Tui);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::try_parse_from([
            "strictly_tictactoe",
            "replay",
            "0",
            "center",
            "--json",
            "--config",
            "custom.toml",
        ])
        .expect("parses");
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec!["0".to_string(), "center".to_string()],
                json: true,
            })
        );
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }
}
