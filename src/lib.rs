//! hexe - a modal terminal editor for raw bytes
//!
//! The editor is organized as a stack of modal frames over one editing
//! session:
//!
//! - `codec`: number bases, endianness and multi-byte interpretations
//! - `buffer`: the byte buffer and its file store
//! - `cursor`: cursor position and scrolling
//! - `search`: pattern search over the buffer
//! - `focus`: modal frames, their text entries and rollback snapshots
//! - `session`: editor state and the per-frame key handlers
//! - `input`: routes terminal events to the active frame
//! - `render`: builds and draws the screen
//! - `tui`: terminal setup and the event loop

pub mod buffer;
pub mod cli;
pub mod codec;
pub mod config;
pub mod cursor;
pub mod focus;
pub mod input;
pub mod logging;
pub mod render;
pub mod search;
pub mod session;
pub mod tui;

pub use buffer::{BufferError, ByteBuffer, FileStore, FsStore, MemoryStore};
pub use codec::{Endian, NumberBase};
pub use config::Config;
pub use session::Session;
