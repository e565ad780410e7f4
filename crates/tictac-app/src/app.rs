use anyhow::{anyhow, Result};
use ratatui::{backend::Backend, Frame, Terminal};

use tictac_config::Settings;
use tictac_core::{event::InputSource, session::Session};
use tictac_ui::{surface::Surface, view::GameView};

/// The controller: input-side session state plus the view that renders it.
pub struct App {
    session: Session,
    view: GameView,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self {
            session: Session::new(),
            view: GameView::new(&settings.layout),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// Clear the frame and draw the whole screen from current state.
    pub fn redraw(&mut self, f: &mut Frame) {
        let mut surface = Surface::new(f.buffer_mut());
        surface.clear();
        self.view.redraw(&self.session, &mut surface);
    }

    /// Block for one key and apply it.
    pub fn handle_input(&mut self, input: &mut impl InputSource) -> Result<()> {
        self.session.handle_input(input)
    }
}

/// Draw, then wait for a key, until the player quits.
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    input: &mut impl InputSource,
) -> Result<()> {
    while app.is_active() {
        terminal
            .draw(|f| app.redraw(f))
            .map_err(|err| anyhow!("failed to draw frame: {err}"))?;
        app.handle_input(input)?;
    }
    Ok(())
}
