//! Screen rendering.
//!
//! - `layout`: geometry shared with the session (row width, band height)
//! - `view`: the [`Screen`] model built from a session
//! - `draw`: ratatui drawing of a `Screen`
//! - `theme`: colors and cell styles

mod draw;
pub mod layout;
pub mod theme;
pub mod view;

pub use draw::draw;
pub use theme::Theme;
pub use view::{Cell, CellStyle, GridRow, PromptLine, Screen};
