//! Cursor and scroll model.
//!
//! Maps the edit position to a (row, column) in the byte grid and keeps the
//! scroll offset such that the cursor row stays inside the visible band.

/// Where to place the cursor row inside the band on an explicit recenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Minimal scroll to bring the cursor back into view
    #[default]
    None,
    Center,
    Top,
    Bottom,
}

impl Alignment {
    /// Next step of the recenter cycle (Center -> Top -> Bottom -> Center).
    fn next_in_cycle(self) -> Self {
        match self {
            Alignment::Center => Alignment::Top,
            Alignment::Top => Alignment::Bottom,
            Alignment::Bottom | Alignment::None => Alignment::Center,
        }
    }
}

/// Edit position plus viewport scroll state.
#[derive(Debug, Clone)]
pub struct CursorModel {
    /// Edit position; may be at or past the end of the buffer
    byte_index: usize,
    /// First visible row
    scroll_offset: usize,
    bytes_per_row: usize,
    /// Number of grid rows visible in the viewport
    region_height: usize,
    /// Alignment used by the previous recenter, if the cycle is still running
    last_recenter: Option<Alignment>,
}

impl CursorModel {
    pub fn new(bytes_per_row: usize, region_height: usize) -> Self {
        Self {
            byte_index: 0,
            scroll_offset: 0,
            bytes_per_row: bytes_per_row.max(1),
            region_height,
            last_recenter: None,
        }
    }

    pub fn byte_index(&self) -> usize {
        self.byte_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    pub fn region_height(&self) -> usize {
        self.region_height
    }

    pub fn row(&self) -> usize {
        self.byte_index / self.bytes_per_row
    }

    pub fn column(&self) -> usize {
        self.byte_index % self.bytes_per_row
    }

    /// Band height used for scrolling; never less than one row.
    fn band(&self) -> usize {
        self.region_height.max(1)
    }

    /// Re-derive the scroll offset from the cursor position.
    pub fn recompute(&mut self, alignment: Alignment) {
        let band = self.band();
        let row = self.row();

        match alignment {
            Alignment::Center => self.scroll_offset = row.saturating_sub(band / 2),
            Alignment::Top => self.scroll_offset = row,
            Alignment::Bottom => self.scroll_offset = row.saturating_sub(band - 1),
            Alignment::None => {
                if row < self.scroll_offset {
                    self.scroll_offset = row;
                } else if row > self.scroll_offset.saturating_add(band - 1) {
                    self.scroll_offset = row - (band - 1);
                }
            }
        }
    }

    /// Move by a signed number of bytes, stopping at index zero.
    pub fn move_by(&mut self, delta: isize) {
        self.byte_index = self.byte_index.saturating_add_signed(delta);
        self.recompute(Alignment::None);
    }

    /// Move by `delta` without walking past `limit` (the append position).
    ///
    /// A cursor already past `limit` (after a goto) is never pulled back by
    /// forward movement.
    pub fn move_within(&mut self, delta: isize, limit: usize) {
        let ceiling = limit.max(self.byte_index);
        self.byte_index = self.byte_index.saturating_add_signed(delta).min(ceiling);
        self.recompute(Alignment::None);
    }

    pub fn jump_to(&mut self, index: usize) {
        self.byte_index = index;
        self.recompute(Alignment::None);
    }

    /// Advance the recenter cycle and apply it.
    pub fn recenter(&mut self) -> Alignment {
        let alignment = self
            .last_recenter
            .map_or(Alignment::Center, Alignment::next_in_cycle);
        self.last_recenter = Some(alignment);
        self.recompute(alignment);
        alignment
    }

    /// Any key other than recenter restarts the cycle at Center.
    pub fn reset_recenter(&mut self) {
        self.last_recenter = None;
    }

    /// Apply new viewport geometry.
    pub fn resize(&mut self, bytes_per_row: usize, region_height: usize) {
        self.bytes_per_row = bytes_per_row.max(1);
        self.region_height = region_height;
        self.recompute(Alignment::None);
    }

    /// Whether `row` is inside the visible band.
    pub fn row_visible(&self, row: usize) -> bool {
        row >= self.scroll_offset && row < self.scroll_offset.saturating_add(self.band())
    }
}
