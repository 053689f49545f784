//! Root edit modes and the literal capture frame.
//!
//! Both root modes share the global edit keys (movement, mode toggles,
//! prompts, save/reload, deletion). Whatever those leave unhandled falls
//! through to mode-specific entry: numbers in the active base for
//! `EditBytes`, characters for `EditAscii`.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::codec::parse_value;
use crate::focus::Focus;
use crate::input::keys::{captured_code, ctrl, is_quit, is_recenter, plain_char};
use crate::session::{KeyResult, Session, Transition};

impl Session {
    /// Keys shared by `EditBytes` and `EditAscii`.
    pub(crate) fn handle_edit_keys(&mut self, key: KeyEvent) -> Result<KeyResult> {
        let len = self.buffer.len();
        let index = self.cursor.byte_index();
        let row_width = self.cursor.bytes_per_row();
        let page = row_width * self.cursor.region_height().max(1);
        let with_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        let result = match key.code {
            // === Movement ===
            KeyCode::Left => self.step(-1, len),
            KeyCode::Right => self.step(1, len),
            KeyCode::Up => self.step(-(row_width as isize), len),
            KeyCode::Down => self.step(row_width as isize, len),
            KeyCode::PageUp => self.step(-(page as isize), len),
            KeyCode::PageDown => self.step(page as isize, len),
            KeyCode::Home if with_ctrl => {
                self.cursor.jump_to(0);
                KeyResult::Consumed
            }
            KeyCode::End if with_ctrl => {
                self.cursor.jump_to(len);
                KeyResult::Consumed
            }
            KeyCode::Home => {
                self.cursor.jump_to(index - self.cursor.column());
                KeyResult::Consumed
            }
            KeyCode::End => {
                let row_end = (index - self.cursor.column()).saturating_add(row_width - 1);
                self.cursor.jump_to(row_end.min(len.max(index)));
                KeyResult::Consumed
            }

            // === Mode toggle ===
            KeyCode::Tab => {
                let other = match self.focus() {
                    Focus::EditAscii => Focus::EditBytes,
                    _ => Focus::EditAscii,
                };
                Transition::Replace(other).into()
            }

            // === Deletion ===
            KeyCode::Delete => {
                self.buffer.delete_byte(index, self.overwrite);
                KeyResult::Consumed
            }
            KeyCode::Backspace if self.stack.active().entry.is_empty() => {
                if index > 0 && index <= len {
                    self.cursor.move_by(-1);
                    self.buffer
                        .delete_byte(self.cursor.byte_index(), self.overwrite);
                } else if index > len {
                    self.cursor.move_by(-1);
                }
                KeyResult::Consumed
            }

            // === Commands ===
            _ if ctrl(&key, 'f') => Transition::Push(Focus::Search).into(),
            _ if ctrl(&key, 'g') => Transition::Push(Focus::GotoByte).into(),
            _ if ctrl(&key, 'b') => Transition::Push(Focus::SelectNumberBase).into(),
            _ if ctrl(&key, 'e') => Transition::Push(Focus::SelectEndian).into(),
            _ if ctrl(&key, 'v') => Transition::Push(Focus::EditCaptureKey).into(),
            _ if is_recenter(&key) => {
                self.cursor.recenter();
                KeyResult::Consumed
            }
            _ if ctrl(&key, 'k') => {
                if self.buffer.delete_to_end(index) {
                    self.set_notice(format!("Truncated at {}", index));
                }
                KeyResult::Consumed
            }
            _ if ctrl(&key, 's') => {
                if self.try_save(false)? {
                    KeyResult::Consumed
                } else {
                    Transition::Push(Focus::ConfirmWriteFile { exit_after: false }).into()
                }
            }
            _ if ctrl(&key, 'r') => {
                if self.try_reload(false)? {
                    KeyResult::Consumed
                } else {
                    Transition::Push(Focus::ConfirmReadFile).into()
                }
            }
            _ if is_quit(&key) => {
                if self.buffer.is_dirty() {
                    Transition::Push(Focus::ConfirmExit).into()
                } else {
                    Transition::Exit.into()
                }
            }

            _ => KeyResult::NotConsumed,
        };

        if result != KeyResult::NotConsumed {
            // Pending digits belong to the old position
            self.stack.root_entry_mut().clear();
        }
        Ok(result)
    }

    fn step(&mut self, delta: isize, len: usize) -> KeyResult {
        self.cursor.move_within(delta, len);
        KeyResult::Consumed
    }

    /// `EditBytes`: digits of the active base build a pending value.
    pub(crate) fn handle_edit_bytes(&mut self, key: KeyEvent) -> Result<KeyResult> {
        let shared = self.handle_edit_keys(key)?;
        if shared != KeyResult::NotConsumed {
            return Ok(shared);
        }

        let result = match key.code {
            KeyCode::Enter => {
                if !self.stack.active().entry.is_empty() {
                    self.commit_pending();
                    KeyResult::Consumed
                } else if self.cursor.byte_index() < self.buffer.len() {
                    Transition::Push(Focus::EditModify).into()
                } else {
                    self.set_notice("Nothing to modify past the end");
                    KeyResult::Consumed
                }
            }
            // Clear key: drop the pending digits
            KeyCode::Backspace => {
                self.stack.active_mut().entry.clear();
                KeyResult::Consumed
            }
            _ => match plain_char(&key) {
                Some(c) if self.base.is_digit(c) => {
                    let entry = &mut self.stack.active_mut().entry;
                    entry.push(c.to_ascii_uppercase());
                    if entry.len() >= self.base.max_digits() {
                        self.commit_pending();
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

    /// Parse the pending digits and write the byte.
    fn commit_pending(&mut self) {
        let text = self.stack.active().entry.text().to_string();
        self.stack.active_mut().entry.clear();
        match parse_value(&text, self.base) {
            Ok(value) => self.commit_byte(u32::try_from(value).unwrap_or(u32::MAX)),
            Err(e) => self.set_notice(e.to_string()),
        }
    }

    /// `EditAscii`: every printable character is written directly.
    pub(crate) fn handle_edit_ascii(&mut self, key: KeyEvent) -> Result<KeyResult> {
        let shared = self.handle_edit_keys(key)?;
        if shared != KeyResult::NotConsumed {
            return Ok(shared);
        }

        match plain_char(&key) {
            Some(c) if !c.is_control() => {
                self.commit_byte(c as u32);
                Ok(KeyResult::Consumed)
            }
            _ => Ok(KeyResult::NotConsumed),
        }
    }

    /// `EditCaptureKey`: the next key is written literally, then the frame
    /// closes.
    pub(crate) fn handle_capture_key(&mut self, key: KeyEvent) -> Result<KeyResult> {
        match captured_code(&key) {
            Some(code) => self.commit_byte(code),
            None => self.set_notice("Key not recognized"),
        }
        Ok(Transition::Pop.into())
    }
}
