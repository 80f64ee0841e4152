//! Terminal UI for the OX game.

mod app;
mod help;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use oxgame_core::GameState;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::config::OxConfig;
use app::App;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &OxConfig) -> Result<()> {
    info!("Starting OX game TUI");

    let game = GameState::with_view(*config.sort_descending(), *config.help_on_start());
    let mut app = App::new(game);

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;
    let res = run_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    match &res {
        Ok(()) => info!(moves = app.game().history().last_step(), "Leaving TUI"),
        Err(err) => error!(error = ?err, "Game loop error"),
    }
    res
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draw, wait for a key, dispatch. Intents are handled strictly one at a
/// time.
fn run_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match input::action_for(key.code) {
                Some(action) => app.handle(action),
                None => debug!(code = ?key.code, "Unbound key"),
            }
        }
    }
    Ok(())
}
