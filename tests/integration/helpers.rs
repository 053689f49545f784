//! Shared helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use hexe::config::EditorConfig;
use hexe::input::{handle_event, InputResult};
use hexe::session::{Session, Viewport};
use hexe::FsStore;

/// Write `content` to a fresh temp directory and return both.
pub fn temp_file(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    (dir, path)
}

/// Open a session on `path` with an 80x24 viewport.
pub fn open_session(path: &Path, config: &EditorConfig) -> Session {
    Session::open(path, Box::new(FsStore), config, Viewport::new(80, 24))
        .expect("Failed to open session")
}

pub fn key(session: &mut Session, code: KeyCode, modifiers: KeyModifiers) -> InputResult {
    handle_event(Event::Key(KeyEvent::new(code, modifiers)), session).expect("key failed")
}

pub fn press(session: &mut Session, code: KeyCode) -> InputResult {
    key(session, code, KeyModifiers::NONE)
}

pub fn ctrl(session: &mut Session, c: char) -> InputResult {
    key(session, KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn type_str(session: &mut Session, text: &str) {
    for c in text.chars() {
        press(session, KeyCode::Char(c));
    }
}
