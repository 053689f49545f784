//! Incremental search prompt.
//!
//! The term is typed as numbers in the active base when the search was
//! opened from `EditBytes`, or as characters when opened from `EditAscii`.
//! Every change to the term re-runs the whole scan.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::input::keys::{ctrl, plain_char};
use crate::search::TermKind;
use crate::session::{KeyResult, Session, Transition};

impl Session {
    pub(crate) fn handle_search(&mut self, key: KeyEvent) -> Result<KeyResult> {
        if ctrl(&key, 'n') || key.code == KeyCode::Down {
            self.find_match(false);
            return Ok(KeyResult::Consumed);
        }
        if ctrl(&key, 'p') || key.code == KeyCode::Up {
            self.find_match(true);
            return Ok(KeyResult::Consumed);
        }
        if key.code == KeyCode::Enter {
            self.stack.active_mut().entry.clear();
            self.search.clear();
            return Ok(Transition::Pop.into());
        }

        let edited = match self.stack.term_kind() {
            TermKind::Bytes => self.edit_byte_term(&key),
            TermKind::Ascii => self.edit_ascii_term(&key),
        };
        match edited {
            Some(true) => {
                self.rerun_search();
                Ok(KeyResult::Consumed)
            }
            Some(false) => Ok(KeyResult::Consumed),
            None => Ok(KeyResult::NotConsumed),
        }
    }

    /// Edit a byte-pattern term. Returns `Some(changed)` when the key
    /// belongs to the prompt.
    fn edit_byte_term(&mut self, key: &KeyEvent) -> Option<bool> {
        let base = self.base;
        let max = base.max_digits();

        if key.code == KeyCode::Backspace {
            return Some(self.stack.active_mut().entry.pop_token());
        }

        let c = plain_char(key)?;
        if c != ' ' && !base.is_digit(c) {
            self.set_notice(format!("'{}' is not a {} digit", c, base));
            return Some(false);
        }

        let entry = &mut self.stack.active_mut().entry;
        if c == ' ' {
            if entry.last_token_len() == 0 {
                return Some(false);
            }
            entry.push(' ');
            return Some(true);
        }

        entry.push(c.to_ascii_uppercase());
        if entry.last_token_len() >= max {
            entry.push(' ');
        }
        Some(true)
    }

    /// Edit a character term.
    fn edit_ascii_term(&mut self, key: &KeyEvent) -> Option<bool> {
        let entry = &mut self.stack.active_mut().entry;
        match key.code {
            KeyCode::Backspace => Some(entry.backspace()),
            KeyCode::Delete => Some(entry.delete()),
            KeyCode::Left => {
                entry.left();
                Some(false)
            }
            KeyCode::Right => {
                entry.right();
                Some(false)
            }
            KeyCode::Home => {
                entry.home();
                Some(false)
            }
            KeyCode::End => {
                entry.end();
                Some(false)
            }
            _ => {
                let c = plain_char(key).filter(|c| !c.is_control())?;
                entry.insert(c);
                Some(true)
            }
        }
    }

    /// Jump to the next (or previous) match relative to the cursor.
    fn find_match(&mut self, reverse: bool) {
        if self.search.results().is_empty() {
            self.set_notice("No matches");
            return;
        }

        let index = self.cursor.byte_index();
        // Step past the match the cursor already sits in
        let from = if reverse {
            index
        } else {
            self.search.containing(index).map_or(index, |r| r.last)
        };

        match self.search.next_result(from, reverse) {
            Some(result) => self.cursor.jump_to(result.first),
            None => self.set_notice("No more matches"),
        }
    }
}
