//! Screen geometry.
//!
//! One grid row is laid out as:
//!
//! ```text
//! 00000010  41 42 43 44 ... │ ABCD...
//! ```
//!
//! an 8-digit address, two spaces, one cell per byte (digits plus a space),
//! a separator and one ASCII column per byte.

use crate::codec::NumberBase;

/// Hex digits in the address column.
pub const ADDRESS_WIDTH: usize = 8;

/// Rows below the grid: interpretation panel (2), status line, prompt line.
pub const CHROME_ROWS: u16 = 4;

/// Rows of the interpretation panel.
pub const INFO_ROWS: u16 = 2;

/// Fixed columns per row besides the byte cells: address + gap + separator.
const FIXED_COLS: usize = ADDRESS_WIDTH + 2 + 2;

/// How many bytes fit on one row of a `cols`-wide terminal.
///
/// Rounded down to a multiple of four once at least four fit; never zero.
pub fn fit_bytes_per_row(cols: u16, base: NumberBase) -> usize {
    let per_byte = base.width() + 2;
    let fit = (cols as usize).saturating_sub(FIXED_COLS) / per_byte;
    if fit >= 4 {
        fit - fit % 4
    } else {
        fit.max(1)
    }
}

/// Grid rows visible in a `rows`-tall terminal.
pub fn region_height(rows: u16) -> usize {
    rows.saturating_sub(CHROME_ROWS) as usize
}
