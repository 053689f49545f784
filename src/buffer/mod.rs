//! Editable byte buffer.
//!
//! Owns the bytes of the file being edited together with its dirty flag and
//! the modification time recorded at the last load or save. All disk access
//! goes through a [`FileStore`] so the guards can be tested in memory.

mod store;

pub use store::{FileStore, FsStore, MemoryStore};

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, info};

/// Errors from buffer mutation and file access.
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("value {0} is out of range (0-255)")]
    OutOfRange(u32),

    #[error("cannot grow the buffer to {0} bytes")]
    TooLarge(usize),

    #[error("buffer has unsaved changes")]
    Unsaved,

    #[error("file was modified on disk")]
    ExternallyModified,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BufferError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// What a successful save did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The buffer was written to disk
    Written { bytes: usize },
    /// Nothing to write; only the recorded modification time was refreshed
    Unchanged,
}

/// The byte sequence being edited.
#[derive(Debug, Clone)]
pub struct ByteBuffer {
    data: Vec<u8>,
    dirty: bool,
    path: PathBuf,
    /// Modification time recorded at the last load or save
    modified: Option<SystemTime>,
}

impl ByteBuffer {
    /// Create an in-memory buffer that has never been loaded from disk.
    pub fn from_bytes(path: impl Into<PathBuf>, data: Vec<u8>) -> Self {
        Self {
            data,
            dirty: false,
            path: path.into(),
            modified: None,
        }
    }

    /// Load `path` through `store`.
    pub fn open(path: impl Into<PathBuf>, store: &dyn FileStore) -> Result<Self, BufferError> {
        let mut buffer = Self::from_bytes(path, Vec::new());
        buffer.load(store, true)?;
        Ok(buffer)
    }

    /// Like [`ByteBuffer::open`], but a missing file gives an empty buffer
    /// that is created on the first save.
    pub fn open_or_new(path: impl Into<PathBuf>, store: &dyn FileStore) -> Result<Self, BufferError> {
        let path = path.into();
        match Self::open(path.clone(), store) {
            Err(BufferError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "new file");
                Ok(Self::from_bytes(path, Vec::new()))
            }
            other => other,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn recorded_mtime(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Write `value` at `index`.
    ///
    /// Overwrites in place when `overwrite` is set and `index` is inside the
    /// buffer, otherwise inserts. An index at or past the end zero-pads up to
    /// `index` and appends.
    pub fn insert_byte(&mut self, index: usize, value: u32, overwrite: bool) -> Result<(), BufferError> {
        let byte = u8::try_from(value).map_err(|_| BufferError::OutOfRange(value))?;

        if index >= self.data.len() {
            let grow = index - self.data.len() + 1;
            self.data
                .try_reserve(grow)
                .map_err(|_| BufferError::TooLarge(index.saturating_add(1)))?;
            self.data.resize(index, 0);
            self.data.push(byte);
        } else if overwrite {
            self.data[index] = byte;
        } else {
            self.data.insert(index, byte);
        }
        self.dirty = true;
        Ok(())
    }

    /// Delete the byte at `index`. Returns whether anything changed.
    ///
    /// In overwrite mode the byte is zeroed and the length is kept.
    pub fn delete_byte(&mut self, index: usize, overwrite: bool) -> bool {
        if index >= self.data.len() {
            return false;
        }
        if overwrite {
            self.data[index] = 0;
        } else {
            self.data.remove(index);
        }
        self.dirty = true;
        true
    }

    /// Truncate the buffer at `index`. Returns whether anything changed.
    pub fn delete_to_end(&mut self, index: usize) -> bool {
        if index >= self.data.len() {
            return false;
        }
        self.data.truncate(index);
        self.dirty = true;
        true
    }

    /// The byte at `index + offset`, if inside the buffer.
    pub fn read_byte(&self, index: usize, offset: usize) -> Option<u8> {
        index
            .checked_add(offset)
            .and_then(|i| self.data.get(i))
            .copied()
    }

    /// Replace the byte at `index` in place. Returns false outside the buffer.
    pub fn set_byte(&mut self, index: usize, value: u8) -> bool {
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Restore a previously captured dirty flag (used by rollback).
    pub fn restore_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Replace the contents with the file on disk.
    ///
    /// Refuses with `Unsaved` when there are local changes and `force` is
    /// not set.
    pub fn load(&mut self, store: &dyn FileStore, force: bool) -> Result<(), BufferError> {
        if self.dirty && !force {
            return Err(BufferError::Unsaved);
        }

        let data = store
            .read(&self.path)
            .map_err(|e| BufferError::io(&self.path, e))?;
        let modified = store
            .modified(&self.path)
            .map_err(|e| BufferError::io(&self.path, e))?;

        info!(path = %self.path.display(), bytes = data.len(), "loaded file");
        self.data = data;
        self.dirty = false;
        self.modified = Some(modified);
        Ok(())
    }

    /// Write the buffer to disk.
    ///
    /// Refuses with `ExternallyModified` when the file changed on disk since
    /// the last load/save and `force` is not set. A clean buffer is not
    /// rewritten unless forced.
    pub fn save(&mut self, store: &dyn FileStore, force: bool) -> Result<SaveOutcome, BufferError> {
        let on_disk = match store.modified(&self.path) {
            Ok(time) => Some(time),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(BufferError::io(&self.path, e)),
        };

        if !force {
            if let (Some(disk), Some(recorded)) = (on_disk, self.modified) {
                if disk > recorded {
                    debug!(path = %self.path.display(), "refusing save over newer file");
                    return Err(BufferError::ExternallyModified);
                }
            }
        }

        if !self.dirty && !force {
            if on_disk.is_some() {
                self.modified = on_disk;
            }
            return Ok(SaveOutcome::Unchanged);
        }

        store
            .write(&self.path, &self.data)
            .map_err(|e| BufferError::io(&self.path, e))?;
        self.modified = Some(
            store
                .modified(&self.path)
                .map_err(|e| BufferError::io(&self.path, e))?,
        );
        self.dirty = false;

        info!(path = %self.path.display(), bytes = self.data.len(), "wrote file");
        Ok(SaveOutcome::Written {
            bytes: self.data.len(),
        })
    }
}
