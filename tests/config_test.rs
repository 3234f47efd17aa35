//! Tests for layered Settings loading

use std::env;
use std::fs;

use tempfile::TempDir;

use mathbox::config::Settings;
use mathbox::exitcode;
use mathbox::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_missing_config_file_when_loading_then_compiled_defaults() {
    // Arrange - point at a file that does not exist so the global one
    // cannot interfere
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    // Act
    let settings = Settings::load(Some(&path)).expect("load defaults");

    // Assert
    assert_eq!(
        settings.exit_keywords,
        ["exit", "end", "cancel", "stop", "quit"].map(String::from)
    );
    assert_eq!(settings.max_result_digits, 1024);
}

#[test]
fn given_config_file_when_loading_then_file_overrides_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("mathbox.toml");
    fs::write(
        &path,
        r#"exit_keywords = ["bail", "done"]
max_result_digits = 64
"#,
    )
    .expect("write config");

    // Act
    let settings = Settings::load(Some(&path)).expect("load file config");

    // Assert
    assert_eq!(settings.exit_keywords, ["bail", "done"].map(String::from));
    assert_eq!(settings.max_result_digits, 64);
}

#[test]
fn given_partial_config_file_when_loading_then_missing_keys_stay_default() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("mathbox.toml");
    fs::write(&path, "max_result_digits = 99\n").expect("write config");

    // Act
    let settings = Settings::load(Some(&path)).expect("load partial config");

    // Assert
    assert_eq!(settings.max_result_digits, 99);
    assert_eq!(settings.exit_keywords.len(), 5);
}

#[test]
fn given_empty_keyword_list_when_loading_then_config_error() {
    // Arrange - a session without exit keywords could never be left
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("mathbox.toml");
    fs::write(&path, "exit_keywords = []\n").expect("write config");

    // Act
    let error = Settings::load(Some(&path)).expect_err("empty keywords must be rejected");

    // Assert
    assert!(error.to_string().contains("exit_keywords"));
    assert_eq!(error.exit_code(), exitcode::CONFIG);
}

#[test]
fn given_malformed_toml_when_loading_then_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("mathbox.toml");
    fs::write(&path, "max_result_digits = [not toml").expect("write config");

    let error = Settings::load(Some(&path)).expect_err("parse failure must surface");
    assert_eq!(error.exit_code(), exitcode::CONFIG);
}

#[test]
fn given_env_overrides_when_loading_then_env_beats_file() {
    // All MATHBOX_* manipulation lives in this one test so parallel
    // tests never observe a half-set environment.
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("mathbox.toml");
    fs::write(
        &path,
        r#"exit_keywords = ["bail"]
max_result_digits = 64
"#,
    )
    .expect("write config");

    env::set_var("MATHBOX_MAX_RESULT_DIGITS", "32");
    env::set_var("MATHBOX_EXIT_KEYWORDS", "leave,flee");

    let result = Settings::load(Some(&path));

    env::remove_var("MATHBOX_MAX_RESULT_DIGITS");
    env::remove_var("MATHBOX_EXIT_KEYWORDS");

    let settings = result.expect("load env overrides");
    assert_eq!(settings.max_result_digits, 32);
    assert_eq!(settings.exit_keywords, ["leave", "flee"].map(String::from));
}
