//! Confirmation prompts guarding destructive actions.
//!
//! Every prompt resolves on the first key: either the chosen action runs
//! or the prompt closes.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::focus::Focus;
use crate::input::keys::is_quit;
use crate::session::{KeyResult, Session, Transition};

fn answer(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

impl Session {
    /// `ConfirmExit`: y saves then exits, n (or the quit key) exits.
    ///
    /// If the file changed on disk the write prompt is shown again with
    /// `exit_after` set instead of overwriting silently.
    pub(crate) fn handle_confirm_exit(&mut self, key: KeyEvent) -> Result<KeyResult> {
        if is_quit(&key) {
            return Ok(Transition::Exit.into());
        }
        let result = match answer(&key) {
            Some('y') => {
                if self.try_save(false)? {
                    Transition::Exit
                } else {
                    Transition::Replace(Focus::ConfirmWriteFile { exit_after: true })
                }
            }
            Some('n') => Transition::Exit,
            _ => Transition::Pop,
        };
        Ok(result.into())
    }

    /// `ConfirmReadFile`: y reloads and drops unsaved changes.
    pub(crate) fn handle_confirm_read(&mut self, key: KeyEvent) -> Result<KeyResult> {
        if answer(&key) == Some('y') {
            self.try_reload(true)?;
            return Ok(Transition::ResetToRoot.into());
        }
        Ok(Transition::Pop.into())
    }

    /// `ConfirmWriteFile`: y overwrites the newer file, r reloads it instead.
    pub(crate) fn handle_confirm_write(
        &mut self,
        key: KeyEvent,
        exit_after: bool,
    ) -> Result<KeyResult> {
        let result = match answer(&key) {
            Some('y') => {
                self.try_save(true)?;
                if exit_after {
                    Transition::Exit
                } else {
                    Transition::Pop
                }
            }
            Some('r') => {
                self.try_reload(true)?;
                Transition::ResetToRoot
            }
            _ => Transition::Pop,
        };
        Ok(result.into())
    }
}
