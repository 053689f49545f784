//! Single-letter base and endian selection prompts.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::codec::{Endian, NumberBase};
use crate::session::{KeyResult, Session, Transition};

fn selection_letter(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) => Some(c),
        _ => None,
    }
}

impl Session {
    /// `SelectNumberBase`: b/o/d/h. Always closes.
    pub(crate) fn handle_select_base(&mut self, key: KeyEvent) -> Result<KeyResult> {
        match selection_letter(&key).and_then(NumberBase::from_key) {
            Some(base) => {
                self.set_base(base);
                self.set_notice(format!("Base: {}", base));
            }
            None => self.set_notice("Unrecognized selection"),
        }
        Ok(Transition::Pop.into())
    }

    /// `SelectEndian`: n/l/b. Always closes.
    pub(crate) fn handle_select_endian(&mut self, key: KeyEvent) -> Result<KeyResult> {
        match selection_letter(&key).and_then(Endian::from_key) {
            Some(endian) => {
                self.set_endian(endian);
                self.set_notice(format!("Endian: {}", endian.label()));
            }
            None => self.set_notice("Unrecognized selection"),
        }
        Ok(Transition::Pop.into())
    }
}
