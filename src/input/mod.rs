//! Input routing for the editor.
//!
//! Receives one terminal event per iteration, applies the global toggles
//! and cancel, hands the key to the active frame's handler and applies the
//! transition it returns.

pub mod keys;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use tracing::trace;

use crate::focus::Focus;
use crate::session::{KeyResult, Session};

/// Result of processing an input event.
///
/// Returned to the main loop to decide whether to keep drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep editing
    Continue,
    /// The session ended
    Quit,
}

impl From<bool> for InputResult {
    fn from(running: bool) -> Self {
        if running {
            InputResult::Continue
        } else {
            InputResult::Quit
        }
    }
}

/// Handle any terminal event.
///
/// I/O failures while saving or reloading are returned as errors and end
/// the session.
pub fn handle_event(event: Event, session: &mut Session) -> Result<InputResult> {
    match event {
        // Windows reports releases too; only presses and repeats edit
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(key, session),
        Event::Resize(cols, rows) => {
            session.resize(cols, rows);
            Ok(InputResult::Continue)
        }
        _ => Ok(InputResult::Continue), // Ignore mouse, focus, paste
    }
}

/// Handle one key press.
pub fn handle_key_event(key: KeyEvent, session: &mut Session) -> Result<InputResult> {
    session.clear_notice();
    if !keys::is_recenter(&key) {
        session.reset_recenter();
    }

    let focus = session.focus();
    if focus != Focus::EditCaptureKey {
        match key.code {
            KeyCode::Insert => {
                session.toggle_overwrite();
                return Ok(InputResult::Continue);
            }
            KeyCode::Esc => return Ok(session.cancel().into()),
            _ => {}
        }
    }

    let result = match focus {
        Focus::EditBytes => session.handle_edit_bytes(key)?,
        Focus::EditAscii => session.handle_edit_ascii(key)?,
        Focus::EditCaptureKey => session.handle_capture_key(key)?,
        Focus::EditModify => session.handle_modify(key)?,
        Focus::SelectNumberBase => session.handle_select_base(key)?,
        Focus::SelectEndian => session.handle_select_endian(key)?,
        Focus::Search => session.handle_search(key)?,
        Focus::GotoByte => session.handle_goto(key)?,
        Focus::ConfirmExit => session.handle_confirm_exit(key)?,
        Focus::ConfirmReadFile => session.handle_confirm_read(key)?,
        Focus::ConfirmWriteFile { exit_after } => session.handle_confirm_write(key, exit_after)?,
    };

    match result {
        KeyResult::Consumed => Ok(InputResult::Continue),
        KeyResult::NotConsumed => {
            trace!(?key, ?focus, "key not handled");
            Ok(InputResult::Continue)
        }
        KeyResult::Transition(transition) => Ok(session.apply(transition).into()),
    }
}
