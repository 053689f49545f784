//! File access seam for the byte buffer.
//!
//! `FsStore` talks to the real filesystem. `MemoryStore` keeps files in
//! memory with a manual clock so load/save guards can be exercised without
//! touching disk timestamps.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, SystemTime};

/// Whole-file read/write access plus modification times.
pub trait FileStore {
    /// Read the full contents of `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the contents of `path`.
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

    /// Last modification time of `path`.
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;
}

impl<T: FileStore + ?Sized> FileStore for Rc<T> {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        (**self).write(path, content)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        (**self).modified(path)
    }
}

/// Filesystem-backed store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FileStore for FsStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        fs::write(path, content)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        fs::metadata(path)?.modified()
    }
}

/// In-memory store with a monotonically advancing fake clock.
///
/// Every write (through the trait or `touch`/`insert`) stamps the file with
/// the next clock tick, so ordering between writes is deterministic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<HashMap<PathBuf, (Vec<u8>, SystemTime)>>,
    ticks: Cell<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tick(&self) -> SystemTime {
        let next = self.ticks.get() + 1;
        self.ticks.set(next);
        SystemTime::UNIX_EPOCH + Duration::from_secs(next)
    }

    /// Create or replace a file, as if another program wrote it.
    pub fn insert(&self, path: impl Into<PathBuf>, content: &[u8]) {
        let stamp = self.tick();
        self.files
            .borrow_mut()
            .insert(path.into(), (content.to_vec(), stamp));
    }

    /// Bump the modification time without changing content.
    pub fn touch(&self, path: &Path) {
        let stamp = self.tick();
        if let Some(entry) = self.files.borrow_mut().get_mut(path) {
            entry.1 = stamp;
        }
    }

    /// Current content of a file, if present.
    pub fn content(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).map(|(data, _)| data.clone())
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} does not exist", path.display()),
    )
}

impl FileStore for MemoryStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.content(path).ok_or_else(|| not_found(path))
    }

    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        self.insert(path, content);
        Ok(())
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        self.files
            .borrow()
            .get(path)
            .map(|(_, stamp)| *stamp)
            .ok_or_else(|| not_found(path))
    }
}
