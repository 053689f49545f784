//! Screen view model.
//!
//! [`Screen::build`] turns a [`Session`] into plain data: address column,
//! byte and ASCII cells with their styling flags, the interpretation panel,
//! the status line and the prompt line. Drawing is a separate step, which
//! keeps everything here testable without a terminal.

use crate::codec::{format_byte, Interpretations};
use crate::focus::Focus;
use crate::session::Session;

use super::layout::ADDRESS_WIDTH;

/// Key hints shown on the prompt line while editing.
pub const EDIT_HINTS: &str =
    "^F find  ^G goto  ^B base  ^E endian  ^S save  ^R reload  Tab bytes/ascii  ^Q quit";

/// Styling flags for one grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub cursor: bool,
    pub search_hit: bool,
    /// Shown as `.` in the ASCII column
    pub unprintable: bool,
    /// The append slot after the last byte
    pub past_end: bool,
}

/// One byte position in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Digits in the active base, padded to the base width
    pub text: String,
    pub ascii: char,
    pub style: CellStyle,
}

/// One grid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub address: String,
    pub cells: Vec<Cell>,
}

/// Content of the bottom line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptLine {
    /// Frame prompt, empty at the root
    pub label: String,
    pub entry: String,
    /// Terminal column of the entry cursor, when the frame takes text
    pub cursor: Option<usize>,
    pub notice: Option<String>,
}

impl PromptLine {
    /// Text as drawn, without styling.
    pub fn text(&self) -> String {
        let mut text = if self.label.is_empty() {
            String::new()
        } else {
            format!("{}: {}", self.label, self.entry)
        };
        match (&self.notice, text.is_empty()) {
            (Some(notice), true) => text.push_str(notice),
            (Some(notice), false) => {
                text.push_str("  ");
                text.push_str(notice);
            }
            (None, true) => text.push_str(EDIT_HINTS),
            (None, false) => {}
        }
        text
    }
}

/// Everything drawn in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub rows: Vec<GridRow>,
    pub bytes_per_row: usize,
    /// Digits per cell in the active base
    pub cell_width: usize,
    /// The ASCII column holds the edit cursor
    pub editing_ascii: bool,
    pub info: Vec<(&'static str, String)>,
    pub status: String,
    pub prompt: PromptLine,
}

impl Screen {
    pub fn build(session: &Session) -> Self {
        let cursor = session.cursor();
        let bytes_per_row = cursor.bytes_per_row();
        let base = session.base();
        let width = base.width();
        let data = session.buffer().as_slice();
        let index = cursor.byte_index();
        let stack = session.stack();

        // Root digits not yet committed are shown in the cursor cell
        let pending = match stack.root().focus {
            Focus::EditBytes if !stack.root().entry.is_empty() => {
                let mut text = stack.root().entry.text().to_string();
                while text.len() < width {
                    text.push('_');
                }
                Some(text)
            }
            _ => None,
        };

        // Last drawn position: the append slot, or the cursor after a goto
        // past the end
        let last = data.len().max(index);
        let mut rows = Vec::with_capacity(cursor.region_height());
        let first = cursor.scroll_offset();
        for row in first..first.saturating_add(cursor.region_height()) {
            let start = row * bytes_per_row;
            if start > last {
                break;
            }
            let end = start.saturating_add(bytes_per_row).min(last.saturating_add(1));
            let cells = (start..end)
                .map(|i| {
                    let mut style = CellStyle {
                        cursor: i == index,
                        search_hit: session.search().containing(i).is_some(),
                        ..CellStyle::default()
                    };
                    let (text, ascii) = match data.get(i) {
                        Some(&b) => {
                            style.unprintable = !is_printable(b);
                            let ascii = if style.unprintable { '.' } else { b as char };
                            (format_byte(b, base), ascii)
                        }
                        None => {
                            style.past_end = true;
                            (" ".repeat(width), ' ')
                        }
                    };
                    let text = match &pending {
                        Some(p) if style.cursor => p.clone(),
                        _ => text,
                    };
                    Cell { text, ascii, style }
                })
                .collect();
            rows.push(GridRow {
                address: format!("{:0width$X}", start, width = ADDRESS_WIDTH),
                cells,
            });
        }

        Self {
            rows,
            bytes_per_row,
            cell_width: width,
            editing_ascii: stack.last_edit_focus() == Focus::EditAscii,
            info: Interpretations::at(data, index, session.endian()).rows(),
            status: status_line(session),
            prompt: prompt_line(session),
        }
    }

    /// Grid row as plain text: address, cells, separator, ASCII column.
    pub fn row_text(&self, row: &GridRow) -> String {
        let mut line = format!("{}  ", row.address);
        for cell in &row.cells {
            line.push_str(&cell.text);
            line.push(' ');
        }
        for _ in row.cells.len()..self.bytes_per_row {
            line.push_str(&" ".repeat(self.cell_width + 1));
        }
        line.push_str("│ ");
        line.extend(row.cells.iter().map(|c| c.ascii));
        line.trim_end().to_string()
    }

    /// Interpretation panel split over its two rows.
    pub fn info_lines(&self) -> [String; 2] {
        let half = self.info.len().div_ceil(2);
        let join = |pairs: &[(&str, String)]| {
            pairs
                .iter()
                .map(|(label, value)| format!("{}: {}", label, value))
                .collect::<Vec<_>>()
                .join("  ")
        };
        [join(&self.info[..half]), join(&self.info[half..])]
    }
}

fn is_printable(b: u8) -> bool {
    (0x20..0x7F).contains(&b)
}

fn status_line(session: &Session) -> String {
    let buffer = session.buffer();
    let mut status = format!(
        "{}{} | {} | {} | {} | {} | {}/{}",
        buffer.path().display(),
        if buffer.is_dirty() { "*" } else { "" },
        session.focus().label(),
        if session.overwrite() { "OVR" } else { "INS" },
        session.base().label(),
        session.endian().label(),
        session.cursor().byte_index(),
        buffer.len(),
    );
    let matches = session.search().results().len();
    if matches > 0 {
        status.push_str(&format!(
            " | {} match{}",
            matches,
            if matches == 1 { "" } else { "es" }
        ));
    }
    status
}

fn prompt_line(session: &Session) -> PromptLine {
    let frame = session.stack().active();
    let notice = session.notice().map(str::to_string);
    if frame.focus.is_edit_root() {
        return PromptLine {
            label: String::new(),
            entry: String::new(),
            cursor: None,
            notice,
        };
    }

    let takes_text = matches!(
        frame.focus,
        Focus::Search | Focus::GotoByte | Focus::EditModify
    );
    let label_width = frame.prompt.chars().count() + 2;
    PromptLine {
        label: frame.prompt.clone(),
        entry: frame.entry.text().to_string(),
        cursor: takes_text.then(|| label_width + frame.entry.cursor()),
        notice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{ByteBuffer, MemoryStore};
    use crate::config::EditorConfig;
    use crate::session::{Transition, Viewport};

    fn session(bytes: &[u8]) -> Session {
        Session::new(
            ByteBuffer::from_bytes("t.bin", bytes.to_vec()),
            Box::new(MemoryStore::new()),
            &EditorConfig::default(),
            Viewport::new(80, 24),
        )
    }

    #[test]
    fn rows_show_address_cells_and_ascii() {
        let screen = Screen::build(&session(b"AB\x00"));
        assert_eq!(screen.rows.len(), 1);
        let row = &screen.rows[0];
        assert_eq!(row.address, "00000000");
        assert_eq!(row.cells.len(), 4);
        assert_eq!(row.cells[0].text, "41");
        assert_eq!(row.cells[2].ascii, '.');
        assert!(row.cells[2].style.unprintable);
        assert!(row.cells[3].style.past_end);
        assert!(row.cells[0].style.cursor);
    }

    #[test]
    fn full_row_adds_append_row() {
        let screen = Screen::build(&session(&[0u8; 16]));
        assert_eq!(screen.rows.len(), 2);
        assert_eq!(screen.rows[1].address, "00000010");
        assert_eq!(screen.rows[1].cells.len(), 1);
    }

    #[test]
    fn empty_buffer_has_one_placeholder() {
        let screen = Screen::build(&session(b""));
        assert_eq!(screen.rows.len(), 1);
        assert!(screen.rows[0].cells[0].style.past_end);
        assert!(screen.rows[0].cells[0].style.cursor);
    }

    #[test]
    fn cursor_past_end_draws_padding_rows() {
        use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

        let mut s = session(&[1, 2, 3]);
        let keys = [
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL),
            KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        ];
        for key in keys {
            crate::input::handle_event(Event::Key(key), &mut s).unwrap();
        }
        assert_eq!(s.cursor().byte_index(), 0x22);

        let screen = Screen::build(&s);
        assert_eq!(screen.rows.len(), 3);
        assert_eq!(screen.rows[1].cells.len(), 16);
        assert!(screen.rows[1].cells.iter().all(|c| c.style.past_end));
        let last = &screen.rows[2];
        assert_eq!(last.address, "00000020");
        assert_eq!(last.cells.len(), 3);
        assert!(last.cells[2].style.cursor);
        assert!(last.cells[2].style.past_end);
        assert!(screen.status.ends_with("34/3"));
    }

    #[test]
    fn row_text_aligns_ascii_column() {
        let screen = Screen::build(&session(b"Hi"));
        let text = screen.row_text(&screen.rows[0]);
        insta::assert_snapshot!(text, @"00000000  48 69                                           │ Hi");
    }

    #[test]
    fn status_line_reports_mode_and_position() {
        let screen = Screen::build(&session(b"abc"));
        insta::assert_snapshot!(screen.status, @"t.bin | BYTES | OVR | hex | native | 0/3");
    }

    #[test]
    fn prompt_shows_hints_at_root() {
        let screen = Screen::build(&session(b"abc"));
        assert_eq!(screen.prompt.text(), EDIT_HINTS);
        assert_eq!(screen.prompt.cursor, None);
    }

    #[test]
    fn goto_prompt_places_cursor_after_label() {
        let mut s = session(b"abc");
        s.apply(Transition::Push(Focus::GotoByte));
        let screen = Screen::build(&s);
        assert_eq!(screen.prompt.text(), "Go to byte: ");
        assert_eq!(screen.prompt.cursor, Some("Go to byte: ".len()));
    }

    #[test]
    fn info_panel_splits_in_two() {
        let screen = Screen::build(&session(&[0xFF]));
        let [first, second] = screen.info_lines();
        assert!(first.starts_with("u8: 255  i8: -1"));
        assert!(second.starts_with("i32: -"));
    }
}
