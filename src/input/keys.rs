//! Key predicates shared by the frame handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// `Ctrl+<c>` (case-insensitive).
pub fn ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
}

/// A character typed without Ctrl or Alt (Shift is allowed).
pub fn plain_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// The recenter key (`Ctrl+L`).
pub fn is_recenter(key: &KeyEvent) -> bool {
    ctrl(key, 'l')
}

/// The quit key (`Ctrl+Q`).
pub fn is_quit(key: &KeyEvent) -> bool {
    ctrl(key, 'q')
}

/// Byte value a captured key stands for, if it has one.
///
/// Ctrl+letter maps to its control code, the named keys to their ASCII
/// codes, any other character to its code point.
pub fn captured_code(key: &KeyEvent) -> Option<u32> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            matches!(c, '@'..='_' | 'a'..='z' | ' ').then(|| (c as u32) & 0x1f)
        }
        KeyCode::Char(c) => Some(c as u32),
        KeyCode::Enter => Some(0x0D),
        KeyCode::Tab => Some(0x09),
        KeyCode::Backspace => Some(0x08),
        KeyCode::Esc => Some(0x1B),
        KeyCode::Delete => Some(0x7F),
        _ => None,
    }
}
