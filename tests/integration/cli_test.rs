//! Integration tests for the command line

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::temp_file;

fn hexe() -> Command {
    let mut cmd = Command::cargo_bin("hexe").expect("binary not built");
    cmd.env("HEXE_LOG", "off");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn no_arguments_prints_usage_and_exits_0() {
    hexe()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: hexe"))
        .stdout(predicate::str::contains("[FILE]"));
}

#[test]
fn help_describes_options() {
    hexe()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("modal terminal editor"))
        .stdout(predicate::str::contains("--bytes-per-row"))
        .stdout(predicate::str::contains("--insert"));
}

#[test]
fn version_flag_prints_version() {
    hexe()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("hexe 0.1.0"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn unknown_base_is_rejected() {
    hexe()
        .args(["--base", "roman", "file.bin"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown base 'roman'"));
}

#[test]
fn broken_config_file_fails_before_editing() {
    let (_dir, config) = temp_file("config.toml", b"[editor]\nbase = 12\n");
    let (_data_dir, data) = temp_file("data.bin", b"abc");

    hexe()
        .arg("--config")
        .arg(&config)
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn write_config_saves_overrides_and_exits() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("hexe").join("config.toml");

    hexe()
        .arg("--config")
        .arg(&config)
        .args(["--write-config", "-b", "dec", "-w", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote config to"));

    let written = std::fs::read_to_string(&config).unwrap();
    assert!(written.contains("base = \"dec\""));
    assert!(written.contains("bytes_per_row = 8"));
}
