//! Editing sessions against files on disk

use std::fs;

use crossterm::event::KeyCode;

use hexe::codec::NumberBase;
use hexe::config::EditorConfig;
use hexe::input::InputResult;
use hexe::render::Screen;

use crate::helpers::{ctrl, open_session, press, temp_file, type_str};

#[test]
fn edit_and_save_hex() {
    let (_dir, path) = temp_file("data.bin", &[0x00, 0x01, 0x02]);
    let mut session = open_session(&path, &EditorConfig::default());

    type_str(&mut session, "de");
    type_str(&mut session, "ad");
    ctrl(&mut session, 's');

    assert_eq!(fs::read(&path).unwrap(), vec![0xDE, 0xAD, 0x02]);
    assert!(!session.buffer().is_dirty());
}

#[test]
fn insert_ascii_and_quit_with_save() {
    let (_dir, path) = temp_file("notes.txt", b"world");
    let config = EditorConfig {
        overwrite: false,
        start_in_ascii: true,
        ..EditorConfig::default()
    };
    let mut session = open_session(&path, &config);

    type_str(&mut session, "hello ");
    assert_eq!(ctrl(&mut session, 'q'), InputResult::Continue);
    assert_eq!(press(&mut session, KeyCode::Char('y')), InputResult::Quit);

    assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");
}

#[test]
fn missing_file_is_created_on_save() {
    let (dir, _) = temp_file("other.bin", b"");
    let path = dir.path().join("new.bin");
    let mut session = open_session(&path, &EditorConfig::default());
    assert!(session.buffer().is_empty());

    type_str(&mut session, "0102");
    ctrl(&mut session, 's');
    assert_eq!(fs::read(&path).unwrap(), vec![1, 2]);
}

#[test]
fn reload_picks_up_changes_on_disk() {
    let (_dir, path) = temp_file("data.bin", b"old");
    let mut session = open_session(&path, &EditorConfig::default());

    fs::write(&path, b"newer").unwrap();
    ctrl(&mut session, 'r');
    assert_eq!(session.buffer().as_slice(), b"newer");
}

#[test]
fn decimal_session_renders_in_base() {
    let (_dir, path) = temp_file("data.bin", &[7, 200]);
    let config = EditorConfig {
        base: NumberBase::Dec,
        ..EditorConfig::default()
    };
    let session = open_session(&path, &config);

    let screen = Screen::build(&session);
    let row = &screen.rows[0];
    assert_eq!(row.cells[0].text, "007");
    assert_eq!(row.cells[1].text, "200");
    assert!(screen.status.contains("| dec |"));
}

#[test]
fn search_highlights_matches_on_screen() {
    let (_dir, path) = temp_file("data.bin", b"abcabc");
    let config = EditorConfig {
        start_in_ascii: true,
        ..EditorConfig::default()
    };
    let mut session = open_session(&path, &config);

    ctrl(&mut session, 'f');
    type_str(&mut session, "bc");
    let screen = Screen::build(&session);
    let hits: Vec<usize> = screen.rows[0]
        .cells
        .iter()
        .enumerate()
        .filter(|(_, c)| c.style.search_hit)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(hits, vec![1, 2, 4, 5]);
    assert!(screen.status.ends_with("| 2 matches"));
    assert_eq!(screen.prompt.text(), "Search: bc");
}
