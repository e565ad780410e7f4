//! Two-player tic-tac-toe in the terminal.
//!
//! Arrow keys move the highlight, space places a mark, `r` starts a new game
//! and `q` quits.

mod app;
mod terminal;

use anyhow::Result;

use tictac_config::Settings;
use tictac_core::{event::CrosstermInput, logging};

use crate::app::App;
use crate::terminal::TerminalGuard;

fn main() -> Result<()> {
    logging::init();
    tracing::info!("tictac starting up");

    let settings = Settings::load()?;
    let mut app = App::new(&settings);

    let mut guard = TerminalGuard::enter()?;
    let res = app::run(guard.terminal_mut(), &mut app, &mut CrosstermInput);
    drop(guard);

    match &res {
        Ok(()) => tracing::info!("tictac shutting down"),
        Err(err) => tracing::error!(error = %err, "tictac exiting with error"),
    }
    res
}
