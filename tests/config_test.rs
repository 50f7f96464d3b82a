//! Tests for loading settings files.

use std::io::Write;
use std::path::PathBuf;
use strictly_tictactoe::{Player, Settings, Tone};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let settings = Settings::load(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.logging().filter(), "info");
    assert_eq!(settings.logging().file(), &PathBuf::from("strictly_tictactoe.log"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r##"
[theme]
x = "#FF0000"

[logging]
filter = "strictly_tictactoe=debug"
"##
    )
    .expect("write config");

    let settings = Settings::load(file.path()).expect("loads");
    assert_eq!(settings.theme().color(Tone::Player(Player::X)), "#FF0000");
    assert_eq!(settings.theme().color(Tone::Player(Player::O)), "#800080");
    assert_eq!(settings.logging().filter(), "strictly_tictactoe=debug");
    assert_eq!(settings.logging().file(), &PathBuf::from("strictly_tictactoe.log"));
}

#[test]
fn test_malformed_toml_is_an_error() {
    let err = Settings::from_toml_str("[theme\nx = 1").expect_err("bad toml");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_bad_colour_is_an_error() {
    let err = Settings::from_toml_str("[theme]\nneutral = \"grey\"\n").expect_err("bad colour");
    assert!(err.message.contains("theme.neutral"));
}

#[test]
fn test_unreadable_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    // A directory exists but cannot be read as a file.
    let err = Settings::load(dir.path()).expect_err("directory is not a file");
    assert!(err.message.contains("Failed to read config file"));
}
