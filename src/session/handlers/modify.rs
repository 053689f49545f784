//! In-place editing of the digits of one byte.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::codec::parse_byte;
use crate::focus::Rollback;
use crate::input::keys::plain_char;
use crate::session::{KeyResult, Session, Transition};

impl Session {
    /// `EditModify`: each digit overwrites the one under the text cursor and
    /// the byte is rewritten immediately. Enter keeps the result; cancel
    /// restores the snapshot.
    pub(crate) fn handle_modify(&mut self, key: KeyEvent) -> Result<KeyResult> {
        let Rollback::Byte { index, .. } = self.stack.active().rollback else {
            return Ok(Transition::Pop.into());
        };

        let last = self.base.width().saturating_sub(1);
        let result = match key.code {
            KeyCode::Enter => Transition::Pop.into(),
            KeyCode::Left => {
                self.stack.active_mut().entry.left();
                KeyResult::Consumed
            }
            KeyCode::Right => {
                let entry = &mut self.stack.active_mut().entry;
                entry.set_cursor((entry.cursor() + 1).min(last));
                KeyResult::Consumed
            }
            KeyCode::Home => {
                self.stack.active_mut().entry.home();
                KeyResult::Consumed
            }
            KeyCode::End => {
                self.stack.active_mut().entry.set_cursor(last);
                KeyResult::Consumed
            }
            _ => match plain_char(&key) {
                Some(c) if self.base.is_digit(c) => {
                    let mut candidate = self.stack.active().entry.clone();
                    candidate.overwrite(c.to_ascii_uppercase());
                    match parse_byte(candidate.text(), self.base) {
                        Ok(value) => {
                            self.buffer.set_byte(index, value);
                            candidate.set_cursor((candidate.cursor() + 1).min(last));
                            self.stack.active_mut().entry = candidate;
                        }
                        Err(e) => self.set_notice(e.to_string()),
                    }
                    KeyResult::Consumed
                }
                Some(c) => {
                    self.set_notice(format!("'{}' is not a {} digit", c, self.base));
                    KeyResult::Consumed
                }
                None => KeyResult::NotConsumed,
            },
        };
        Ok(result)
    }
}
