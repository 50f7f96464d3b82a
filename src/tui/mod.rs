//! Terminal front end.
//!
//! Maps key presses to game actions and paints the game's render plan with
//! ratatui. Everything runs on the calling thread: one key press, one
//! action, one redraw.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, Direction, action_for, move_cursor};

use crate::render::Theme;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
#[instrument(skip(theme))]
pub fn run_tui(theme: Theme) -> Result<()> {
    info!("Starting Strictly Tic-Tac-Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(theme));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("TUI exited");
    res
}

fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = action_for(key.code) {
                    app.handle(action);
                }
            }
        }
    }
    Ok(())
}
