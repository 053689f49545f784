//! Go-to-offset prompt.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::codec::parse_value;
use crate::input::keys::plain_char;
use crate::session::{KeyResult, Session, Transition};

impl Session {
    /// `GotoByte`: digits of the active base; Enter jumps and closes.
    ///
    /// Targets past the end are kept; typing there zero-pads the buffer.
    pub(crate) fn handle_goto(&mut self, key: KeyEvent) -> Result<KeyResult> {
        let entry = &mut self.stack.active_mut().entry;
        let result = match key.code {
            KeyCode::Enter => {
                let text = entry.text().to_string();
                if !text.is_empty() {
                    match parse_value(&text, self.base) {
                        Ok(target) => {
                            self.cursor.jump_to(usize::try_from(target).unwrap_or(usize::MAX));
                        }
                        Err(e) => self.set_notice(e.to_string()),
                    }
                }
                Transition::Pop.into()
            }
            KeyCode::Backspace => {
                entry.backspace();
                KeyResult::Consumed
            }
            KeyCode::Delete => {
                entry.delete();
                KeyResult::Consumed
            }
            KeyCode::Left => {
                entry.left();
                KeyResult::Consumed
            }
            KeyCode::Right => {
                entry.right();
                KeyResult::Consumed
            }
            KeyCode::Home => {
                entry.home();
                KeyResult::Consumed
            }
            KeyCode::End => {
                entry.end();
                KeyResult::Consumed
            }
            _ => match plain_char(&key) {
                Some(c) if self.base.is_digit(c) => {
                    entry.insert(c.to_ascii_uppercase());
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
