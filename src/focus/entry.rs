//! Single-line text entry with its own cursor.
//!
//! The cursor counts characters, not bytes, so Latin-1 input typed into an
//! ASCII search behaves the same as plain ASCII.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    text: String,
    cursor: usize,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry holding `text` with the cursor after the last character.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    /// Entry holding `text` with the cursor on the first character.
    pub fn at_start(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert at the cursor and advance.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Append at the end, moving the cursor to the end.
    pub fn push(&mut self, c: char) {
        self.text.push(c);
        self.cursor = self.len();
    }

    /// Remove the character before the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    /// Remove the character under the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    /// Replace the character under the cursor (append at the end).
    pub fn overwrite(&mut self, c: char) {
        if self.cursor >= self.len() {
            self.push(c);
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        self.text.insert(at, c);
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }

    /// Move the cursor, clamped to the text.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.len());
    }

    /// Length of the last whitespace-separated token (0 after a separator).
    pub fn last_token_len(&self) -> usize {
        self.text
            .chars()
            .rev()
            .take_while(|c| !c.is_whitespace())
            .count()
    }

    /// Drop trailing separators and the token before them.
    pub fn pop_token(&mut self) -> bool {
        let trimmed = self.text.trim_end();
        if trimmed.is_empty() {
            let changed = !self.text.is_empty();
            self.clear();
            return changed;
        }
        let keep = trimmed
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        self.text.truncate(keep);
        self.cursor = self.len();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_at_cursor() {
        let mut e = Entry::with_text("ac");
        e.left();
        e.insert('b');
        assert_eq!(e.text(), "abc");
        assert_eq!(e.cursor(), 2);
        assert!(e.backspace());
        assert_eq!(e.text(), "ac");
        e.home();
        assert!(!e.backspace());
    }

    #[test]
    fn delete_under_cursor() {
        let mut e = Entry::at_start("xyz");
        assert!(e.delete());
        assert_eq!(e.text(), "yz");
        e.end();
        assert!(!e.delete());
    }

    #[test]
    fn overwrite_replaces_in_place() {
        let mut e = Entry::at_start("00");
        e.overwrite('4');
        e.right();
        e.overwrite('1');
        assert_eq!(e.text(), "41");
        assert_eq!(e.cursor(), 1);
    }

    #[test]
    fn cursor_counts_chars() {
        let mut e = Entry::with_text("é");
        assert_eq!(e.cursor(), 1);
        e.insert('x');
        assert_eq!(e.text(), "éx");
        e.left();
        e.left();
        e.insert('a');
        assert_eq!(e.text(), "aéx");
    }

    #[test]
    fn token_helpers() {
        let mut e = Entry::with_text("41 42 4");
        assert_eq!(e.last_token_len(), 1);
        assert!(e.pop_token());
        assert_eq!(e.text(), "41 42 ");
        assert_eq!(e.last_token_len(), 0);
        assert!(e.pop_token());
        assert_eq!(e.text(), "41 ");
        assert!(e.pop_token());
        assert_eq!(e.text(), "");
        assert!(!e.pop_token());
    }
}
