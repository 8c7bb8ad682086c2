//! Integration tests for the vidctl CLI

use predicates::prelude::*;

use vidctl::store::{JsonFileStore, PositionStore};

use crate::helpers::{non_empty, Sandbox};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    Sandbox::new()
        .vidctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("chapters"))
        .stdout(predicate::str::contains("position"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn play_help_shows_flags() {
    Sandbox::new()
        .vidctl()
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--duration"))
        .stdout(predicate::str::contains("--no-resume"))
        .stdout(predicate::str::contains("--no-captions"));
}

#[test]
fn unknown_subcommand_fails() {
    Sandbox::new()
        .vidctl()
        .arg("rewind")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ============================================================================
// Chapters
// ============================================================================

#[test]
fn chapters_lists_defaults() {
    Sandbox::new()
        .vidctl()
        .arg("chapters")
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00:00  Opening"))
        .stdout(predicate::str::contains("01:15:00  Intermission"))
        .stdout(predicate::str::contains("02:20:00  Finale"));
}

#[test]
fn chapters_reads_config_and_sorts() {
    let sandbox = Sandbox::new();
    sandbox.write_config(
        r#"
[[chapters]]
label = "Credits"
time = 600.0

[[chapters]]
label = "Cold open"
time = 0.0
"#,
    );

    sandbox
        .vidctl()
        .arg("chapters")
        .assert()
        .success()
        .stdout("00:00:00  Cold open\n00:10:00  Credits\n");
}

#[test]
fn invalid_config_is_reported() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[playback\n");

    sandbox
        .vidctl()
        .arg("chapters")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));
}

// ============================================================================
// Position
// ============================================================================

#[test]
fn position_show_without_saved_position() {
    Sandbox::new()
        .vidctl()
        .args(["position", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved position."));
}

#[test]
fn position_show_and_clear() {
    let sandbox = Sandbox::new();
    let mut store = JsonFileStore::open(sandbox.store_path()).unwrap();
    store.set("gh_movie_player_position", "120.5").unwrap();

    sandbox
        .vidctl()
        .args(["position", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:02:00"));

    sandbox
        .vidctl()
        .args(["position", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved position cleared."));

    let store = JsonFileStore::open(sandbox.store_path()).unwrap();
    assert_eq!(store.get("gh_movie_player_position").unwrap(), None);
}

#[test]
fn position_clear_recovers_from_corrupt_store() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.store_path(), "{not json").unwrap();

    sandbox
        .vidctl()
        .args(["position", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is corrupt"));

    sandbox
        .vidctl()
        .args(["position", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved position cleared."));

    sandbox
        .vidctl()
        .args(["position", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved position."));
}

#[test]
fn position_uses_configured_storage_key() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[playback]\nstorage_key = \"custom\"\n");
    let mut store = JsonFileStore::open(sandbox.store_path()).unwrap();
    store.set("custom", "3600").unwrap();

    sandbox
        .vidctl()
        .args(["position", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("01:00:00"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    Sandbox::new()
        .vidctl()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "storage_key = \"gh_movie_player_position\"",
        ))
        .stdout(predicate::str::contains("[fullscreen]"));
}

#[test]
fn config_path_points_into_config_dir() {
    let sandbox = Sandbox::new();
    let expected = sandbox.config.path().join("config.toml");

    sandbox
        .vidctl()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

// ============================================================================
// Play (non-interactive paths only)
// ============================================================================

#[test]
fn play_rejects_zero_duration() {
    Sandbox::new()
        .vidctl()
        .args(["play", "--duration", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Duration must be a positive"));
}

#[test]
fn commands_write_a_log_file() {
    let sandbox = Sandbox::new();
    sandbox
        .vidctl()
        .args(["play", "--duration", "0"])
        .assert()
        .code(1);

    assert!(non_empty(&sandbox.data.path().join("vidctl.log")));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_for_bash() {
    Sandbox::new()
        .vidctl()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vidctl"));
}
