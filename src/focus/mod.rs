//! Modal focus stack.
//!
//! Every interaction mode is a frame on a stack. The top frame receives
//! keys; the bottom frame is always one of the two root edit modes. Frames
//! that can be cancelled carry a rollback snapshot taken when they were
//! pushed.

mod entry;

pub use entry::Entry;

use crate::buffer::ByteBuffer;
use crate::cursor::CursorModel;
use crate::search::TermKind;

/// The interaction mode of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing numbers in the active base
    EditBytes,
    /// Typing characters
    EditAscii,
    /// Next key is inserted literally
    EditCaptureKey,
    /// Editing the digits of the byte under the cursor in place
    EditModify,
    SelectNumberBase,
    SelectEndian,
    Search,
    GotoByte,
    ConfirmExit,
    ConfirmReadFile,
    /// Overwrite a file changed on disk; `exit_after` when raised from quit
    ConfirmWriteFile { exit_after: bool },
}

impl Focus {
    /// Whether this focus can sit at the bottom of the stack.
    pub fn is_edit_root(self) -> bool {
        matches!(self, Focus::EditBytes | Focus::EditAscii)
    }

    /// Default prompt text.
    pub fn prompt(self) -> &'static str {
        match self {
            Focus::EditBytes | Focus::EditAscii => "",
            Focus::EditCaptureKey => "Press a key to insert",
            Focus::EditModify => "Modify byte",
            Focus::SelectNumberBase => "Base: (b)inary (o)ctal (d)ecimal (h)ex",
            Focus::SelectEndian => "Endian: (n)ative (l)ittle (b)ig",
            Focus::Search => "Search",
            Focus::GotoByte => "Go to byte",
            Focus::ConfirmExit => "Save changes before exit? (y)es (n)o",
            Focus::ConfirmReadFile => "Discard unsaved changes and reload? (y)es",
            Focus::ConfirmWriteFile { .. } => "File changed on disk. (y) overwrite (r) reload",
        }
    }

    /// Short name for the status line and logs.
    pub fn label(self) -> &'static str {
        match self {
            Focus::EditBytes => "BYTES",
            Focus::EditAscii => "ASCII",
            Focus::EditCaptureKey => "CAPTURE",
            Focus::EditModify => "MODIFY",
            Focus::SelectNumberBase => "BASE",
            Focus::SelectEndian => "ENDIAN",
            Focus::Search => "SEARCH",
            Focus::GotoByte => "GOTO",
            Focus::ConfirmExit | Focus::ConfirmReadFile | Focus::ConfirmWriteFile { .. } => {
                "CONFIRM"
            }
        }
    }
}

/// State restored when a frame is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rollback {
    #[default]
    None,
    /// Cursor byte index before a search started
    Cursor(usize),
    /// Byte value and buffer dirty flag before an in-place modify
    Byte { index: usize, value: u8, dirty: bool },
}

/// One modal frame.
#[derive(Debug, Clone)]
pub struct FocusFrame {
    pub focus: Focus,
    pub prompt: String,
    pub entry: Entry,
    pub rollback: Rollback,
}

impl FocusFrame {
    fn new(focus: Focus, prompt: &str, entry: Entry, rollback: Rollback) -> Self {
        Self {
            focus,
            prompt: prompt.to_string(),
            entry,
            rollback,
        }
    }
}

/// Stack of frames; never empty.
#[derive(Debug, Clone)]
pub struct FocusStack {
    frames: Vec<FocusFrame>,
    last_edit_focus: Focus,
}

impl FocusStack {
    /// Create a stack holding a single root edit frame.
    ///
    /// A non-root focus falls back to `EditBytes`.
    pub fn new(root: Focus) -> Self {
        let root = if root.is_edit_root() {
            root
        } else {
            Focus::EditBytes
        };
        Self {
            frames: vec![FocusFrame::new(root, root.prompt(), Entry::new(), Rollback::None)],
            last_edit_focus: root,
        }
    }

    pub fn active(&self) -> &FocusFrame {
        // The stack is never empty: pop keeps the root frame
        &self.frames[self.frames.len() - 1]
    }

    pub fn active_mut(&mut self) -> &mut FocusFrame {
        let top = self.frames.len() - 1;
        &mut self.frames[top]
    }

    pub fn focus(&self) -> Focus {
        self.active().focus
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[FocusFrame] {
        &self.frames
    }

    pub fn root(&self) -> &FocusFrame {
        &self.frames[0]
    }

    /// Pending entry of the root edit frame.
    pub fn root_entry_mut(&mut self) -> &mut Entry {
        &mut self.frames[0].entry
    }

    /// Which root edit mode was active most recently.
    pub fn last_edit_focus(&self) -> Focus {
        self.last_edit_focus
    }

    /// How search terms are typed given the edit mode the user came from.
    pub fn term_kind(&self) -> TermKind {
        match self.last_edit_focus {
            Focus::EditAscii => TermKind::Ascii,
            _ => TermKind::Bytes,
        }
    }

    /// Snapshot the state `focus` needs to undo itself.
    fn capture(focus: Focus, cursor: &CursorModel, buffer: &ByteBuffer) -> Rollback {
        match focus {
            Focus::Search => Rollback::Cursor(cursor.byte_index()),
            Focus::EditModify => {
                let index = cursor.byte_index();
                buffer
                    .read_byte(index, 0)
                    .map_or(Rollback::None, |value| Rollback::Byte {
                        index,
                        value,
                        dirty: buffer.is_dirty(),
                    })
            }
            _ => Rollback::None,
        }
    }

    /// Push a new active frame.
    pub fn push(
        &mut self,
        focus: Focus,
        prompt: &str,
        entry: Entry,
        cursor: &CursorModel,
        buffer: &ByteBuffer,
    ) {
        let rollback = Self::capture(focus, cursor, buffer);
        if focus.is_edit_root() {
            self.last_edit_focus = focus;
        }
        self.frames
            .push(FocusFrame::new(focus, prompt, entry, rollback));
    }

    /// Remove the active frame. Returns `None` when only the root is left,
    /// which means the session should end.
    pub fn pop(&mut self) -> Option<FocusFrame> {
        if self.frames.len() == 1 {
            return None;
        }
        let frame = self.frames.pop();
        if let Some(top) = self.frames.last() {
            if top.focus.is_edit_root() {
                self.last_edit_focus = top.focus;
            }
        }
        frame
    }

    /// Swap the active frame without changing the depth.
    ///
    /// The root can only be replaced by another root edit mode; any other
    /// focus is pushed on top of it instead.
    pub fn replace(
        &mut self,
        focus: Focus,
        prompt: &str,
        entry: Entry,
        cursor: &CursorModel,
        buffer: &ByteBuffer,
    ) {
        if self.frames.len() == 1 && !focus.is_edit_root() {
            self.push(focus, prompt, entry, cursor, buffer);
            return;
        }
        let rollback = Self::capture(focus, cursor, buffer);
        if focus.is_edit_root() {
            self.last_edit_focus = focus;
        }
        *self.active_mut() = FocusFrame::new(focus, prompt, entry, rollback);
    }

    /// Drop every frame above the root and clear the root entry.
    pub fn reset_to_root(&mut self) {
        self.frames.truncate(1);
        let root = &mut self.frames[0];
        root.entry.clear();
        self.last_edit_focus = root.focus;
    }
}
