//! Main event loop.

use anyhow::{Context, Result};
use crossterm::event;
use tracing::{debug, info};

use crate::input::{handle_event, InputResult};
use crate::render::{self, Screen, Theme};
use crate::session::Session;

use super::guard::TerminalGuard;

/// Run the editor until the session ends.
///
/// The terminal is restored before this returns, whether or not it fails.
#[cfg(not(tarpaulin_include))]
pub fn run(session: &mut Session) -> Result<()> {
    let (_guard, mut terminal) = TerminalGuard::enter()?;
    let theme = Theme::default();

    let size = terminal.size().context("Failed to query terminal size")?;
    session.resize(size.width, size.height);
    info!(
        path = %session.buffer().path().display(),
        bytes = session.buffer().len(),
        cols = size.width,
        rows = size.height,
        "session started"
    );

    loop {
        let screen = Screen::build(session);
        terminal
            .draw(|frame| render::draw(frame, &screen, &theme))
            .context("Failed to draw")?;

        let event = event::read().context("Failed to read terminal input")?;
        if handle_event(event, session)? == InputResult::Quit {
            break;
        }
    }

    debug!(dirty = session.buffer().is_dirty(), "session ended");
    Ok(())
}
