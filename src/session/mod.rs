//! Editing session context.
//!
//! `Session` bundles every piece of mutable editor state (buffer, cursor,
//! search results, focus stack, base/endian/overwrite toggles and the
//! transient notice) into one object that the key handlers operate on.
//! Handlers never unwind the stack themselves; they return a
//! [`KeyResult`] that the router applies through [`Session::apply`].

mod handlers;

use anyhow::Result;
use tracing::{debug, warn};

use crate::buffer::{BufferError, ByteBuffer, FileStore, SaveOutcome};
use crate::codec::{format_byte, Endian, NumberBase};
use crate::config::EditorConfig;
use crate::cursor::CursorModel;
use crate::focus::{Entry, Focus, FocusStack, Rollback};
use crate::render::layout;
use crate::search::{pattern_from_term, SearchEngine};

/// Stack change requested by a frame handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Open a new frame on top
    Push(Focus),
    /// Close the active frame
    Pop,
    /// Swap the active frame in place
    Replace(Focus),
    /// Close everything above the root edit frame
    ResetToRoot,
    /// End the session
    Exit,
}

/// Outcome of handing one key to a frame handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key handled, no stack change
    Consumed,
    /// Key has no meaning in this frame
    NotConsumed,
    /// Key handled and the stack must change
    Transition(Transition),
}

impl From<Transition> for KeyResult {
    fn from(t: Transition) -> Self {
        KeyResult::Transition(t)
    }
}

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

/// All state of one editing session.
pub struct Session {
    buffer: ByteBuffer,
    cursor: CursorModel,
    search: SearchEngine,
    stack: FocusStack,
    base: NumberBase,
    endian: Endian,
    overwrite: bool,
    notice: Option<String>,
    store: Box<dyn FileStore>,
    viewport: Viewport,
    /// Configured row width; `None` fits the terminal
    fixed_bytes_per_row: Option<usize>,
}

impl Session {
    /// Create a session over an already loaded buffer.
    pub fn new(
        buffer: ByteBuffer,
        store: Box<dyn FileStore>,
        config: &EditorConfig,
        viewport: Viewport,
    ) -> Self {
        let root = if config.start_in_ascii {
            Focus::EditAscii
        } else {
            Focus::EditBytes
        };
        let fixed_bytes_per_row = (config.bytes_per_row > 0).then_some(config.bytes_per_row);

        let mut session = Self {
            buffer,
            cursor: CursorModel::new(1, 1),
            search: SearchEngine::new(),
            stack: FocusStack::new(root),
            base: config.base,
            endian: config.endian,
            overwrite: config.overwrite,
            notice: None,
            store,
            viewport,
            fixed_bytes_per_row,
        };
        session.relayout();
        session
    }

    /// Load `path` through `store` and start a session on it. A missing file
    /// starts an empty buffer.
    pub fn open(
        path: impl Into<std::path::PathBuf>,
        store: Box<dyn FileStore>,
        config: &EditorConfig,
        viewport: Viewport,
    ) -> Result<Self, BufferError> {
        let buffer = ByteBuffer::open_or_new(path, store.as_ref())?;
        Ok(Self::new(buffer, store, config, viewport))
    }

    // --- accessors ---

    pub fn buffer(&self) -> &ByteBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> &CursorModel {
        &self.cursor
    }

    pub fn search(&self) -> &SearchEngine {
        &self.search
    }

    pub fn stack(&self) -> &FocusStack {
        &self.stack
    }

    pub fn focus(&self) -> Focus {
        self.stack.focus()
    }

    pub fn base(&self) -> NumberBase {
        self.base
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub(crate) fn set_notice(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!(notice = %text, "notice");
        self.notice = Some(text);
    }

    pub(crate) fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub(crate) fn toggle_overwrite(&mut self) {
        self.overwrite = !self.overwrite;
        self.set_notice(if self.overwrite {
            "Overwrite mode"
        } else {
            "Insert mode"
        });
    }

    pub(crate) fn reset_recenter(&mut self) {
        self.cursor.reset_recenter();
    }

    // --- geometry ---

    /// Apply a terminal resize.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Viewport::new(cols, rows);
        self.relayout();
    }

    /// Re-derive row width and band height from the viewport and base.
    fn relayout(&mut self) {
        let bytes_per_row = self
            .fixed_bytes_per_row
            .unwrap_or_else(|| layout::fit_bytes_per_row(self.viewport.cols, self.base));
        let region = layout::region_height(self.viewport.rows);
        self.cursor.resize(bytes_per_row, region);
    }

    // --- stack transitions ---

    /// Apply a handler's transition. Returns false when the session ends.
    pub fn apply(&mut self, transition: Transition) -> bool {
        debug!(?transition, from = ?self.focus(), "transition");
        match transition {
            Transition::Push(focus) => {
                let entry = self.initial_entry(focus);
                self.stack
                    .push(focus, focus.prompt(), entry, &self.cursor, &self.buffer);
                self.refresh_context();
                true
            }
            Transition::Replace(focus) => {
                let entry = self.initial_entry(focus);
                self.stack
                    .replace(focus, focus.prompt(), entry, &self.cursor, &self.buffer);
                self.refresh_context();
                true
            }
            Transition::Pop => {
                if self.stack.pop().is_none() {
                    return false;
                }
                self.refresh_context();
                true
            }
            Transition::ResetToRoot => {
                self.stack.reset_to_root();
                self.refresh_context();
                true
            }
            Transition::Exit => false,
        }
    }

    fn initial_entry(&self, focus: Focus) -> Entry {
        match focus {
            Focus::EditModify => self
                .buffer
                .read_byte(self.cursor.byte_index(), 0)
                .map(|b| Entry::at_start(&format_byte(b, self.base)))
                .unwrap_or_default(),
            _ => Entry::new(),
        }
    }

    /// Re-run state that depends on the active frame.
    fn refresh_context(&mut self) {
        if self.focus() == Focus::Search {
            self.rerun_search();
        } else {
            self.search.clear();
        }
    }

    /// Cancel the active frame, restoring its rollback snapshot.
    ///
    /// Returns false when the session ends (never for the root frame, whose
    /// pending entry is cleared in place).
    pub fn cancel(&mut self) -> bool {
        let frame = self.stack.active_mut();
        frame.entry.clear();
        let rollback = frame.rollback;
        match rollback {
            Rollback::Cursor(index) => self.cursor.jump_to(index),
            Rollback::Byte {
                index,
                value,
                dirty,
            } => {
                self.buffer.set_byte(index, value);
                self.buffer.restore_dirty(dirty);
            }
            Rollback::None => {}
        }

        if self.stack.depth() == 1 {
            return true;
        }
        self.apply(Transition::Pop)
    }

    // --- operations shared by handlers ---

    /// Write one byte at the cursor and advance.
    pub(crate) fn commit_byte(&mut self, value: u32) {
        match self
            .buffer
            .insert_byte(self.cursor.byte_index(), value, self.overwrite)
        {
            Ok(()) => self.cursor.move_by(1),
            Err(e) => self.set_notice(e.to_string()),
        }
    }

    /// Re-run the search for the active frame's term.
    pub(crate) fn rerun_search(&mut self) {
        let kind = self.stack.term_kind();
        let term = self.stack.active().entry.text().to_string();
        match pattern_from_term(&term, kind, self.base) {
            Ok(pattern) => {
                self.search.search(self.buffer.as_slice(), &pattern);
            }
            Err(e) => {
                self.search.clear();
                self.set_notice(e.to_string());
            }
        }
    }

    /// Save the buffer. `Ok(false)` means the file changed on disk and the
    /// caller must ask before forcing.
    pub(crate) fn try_save(&mut self, force: bool) -> Result<bool> {
        match self.buffer.save(self.store.as_ref(), force) {
            Ok(SaveOutcome::Written { bytes }) => {
                self.set_notice(format!(
                    "Wrote {} bytes to {}",
                    bytes,
                    self.buffer.path().display()
                ));
                Ok(true)
            }
            Ok(SaveOutcome::Unchanged) => {
                self.set_notice("No changes to write");
                Ok(true)
            }
            Err(BufferError::ExternallyModified) => Ok(false),
            Err(e) => {
                warn!(error = %e, "save failed");
                Err(e.into())
            }
        }
    }

    /// Reload from disk. `Ok(false)` means there are unsaved changes and the
    /// caller must ask before forcing.
    pub(crate) fn try_reload(&mut self, force: bool) -> Result<bool> {
        match self.buffer.load(self.store.as_ref(), force) {
            Ok(()) => {
                let index = self.cursor.byte_index().min(self.buffer.len());
                self.cursor.jump_to(index);
                self.set_notice(format!(
                    "Read {} bytes from {}",
                    self.buffer.len(),
                    self.buffer.path().display()
                ));
                Ok(true)
            }
            Err(BufferError::Unsaved) => Ok(false),
            Err(e) => {
                warn!(error = %e, "reload failed");
                Err(e.into())
            }
        }
    }

    pub(crate) fn set_base(&mut self, base: NumberBase) {
        self.base = base;
        // Pending digits may not be valid in the new base
        self.stack.root_entry_mut().clear();
        self.relayout();
    }

    pub(crate) fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }
}
