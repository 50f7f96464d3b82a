//! Strictly Tic-Tac-Toe - command line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use strictly_tictactoe::{Cli, Command, Settings, render, replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Tui => run_tui_mode(&settings),
        Command::Replay { moves, json } => run_replay(&settings, &moves, json),
    }
}

/// Builds the log filter from `RUST_LOG`, falling back to the settings file.
fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging().filter()))
}

/// Run the terminal game, logging to a file so the screen stays clean.
fn run_tui_mode(settings: &Settings) -> Result<()> {
    let path = settings.logging().file();
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    run_tui(settings.theme().clone())
}

/// Replay moves headlessly and print the outcome.
fn run_replay(settings: &Settings, moves: &[String], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .init();

    print_replay(moves, json)
}

#[instrument(skip(moves), fields(count = moves.len()))]
fn print_replay(moves: &[String], json: bool) -> Result<()> {
    let game = replay(moves);
    let status = game.status();
    info!(?status, "Replay finished");

    let plan = render(&status, game.board());
    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("{}", plan);
    }
    Ok(())
}
