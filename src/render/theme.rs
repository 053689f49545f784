//! Theme for the editor screen.
//!
//! Centralizes all color and style definitions for easy customization.

use ratatui::style::{Color, Modifier, Style};

use super::view::CellStyle;

/// Colors used to draw the editor.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (byte cells, ASCII column)
    pub text_primary: Color,
    /// Secondary/dimmed text color (addresses, hints, separators)
    pub text_secondary: Color,
    /// Accent color for the mode label and prompts
    pub accent: Color,
    /// Error/notice color
    pub error: Color,
    /// Search match background
    pub search_hit: Color,
    /// Unprintable byte color in the ASCII column
    pub unprintable: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Standard ANSI colors for consistent terminal rendering.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            error: Color::Red,
            search_hit: Color::Yellow,
            unprintable: Color::DarkGray,
        }
    }

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for bold accented text (mode label, prompt).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for notices.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style of one grid cell.
    ///
    /// `ascii` selects the ASCII column, where unprintable bytes are dimmed.
    /// The cursor is reversed on the side being edited and underlined on
    /// the other.
    pub fn cell_style(&self, cell: CellStyle, ascii: bool, editing_ascii: bool) -> Style {
        let mut style = if ascii && cell.unprintable {
            Style::default().fg(self.unprintable)
        } else {
            self.text_style()
        };
        if cell.search_hit {
            style = style.bg(self.search_hit).fg(Color::Black);
        }
        if cell.cursor {
            style = if ascii == editing_ascii {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style.add_modifier(Modifier::UNDERLINED)
            };
        }
        if cell.past_end {
            style = style.fg(self.text_secondary);
        }
        style
    }
}
