//! Position persistence across sessions

use vidctl::media::MediaElement;
use vidctl::store::{DisabledStore, JsonFileStore, PositionStore};

use crate::helpers::{load, non_empty, play_for, session, KEY};

#[test]
fn position_survives_a_restart() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("positions.json");

    let mut first = session(JsonFileStore::open(&path).unwrap(), 600.0);
    load(&mut first);
    play_for(&mut first, 42.0);
    drop(first);

    assert!(non_empty(&path));

    let mut second = session(JsonFileStore::open(&path).unwrap(), 600.0);
    load(&mut second);
    assert_eq!(second.media().position(), 42.0);
    assert_eq!(second.view().status, "Resumed at 00:00:42");
}

#[test]
fn saved_position_past_end_is_ignored() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("positions.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.set(KEY, "900").unwrap();

    let mut sync = session(JsonFileStore::open(&path).unwrap(), 600.0);
    load(&mut sync);
    assert_eq!(sync.media().position(), 0.0);
    assert_eq!(sync.view().status, "");
}

#[test]
fn garbage_saved_position_is_ignored() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("positions.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.set(KEY, "not a number").unwrap();

    let mut sync = session(JsonFileStore::open(&path).unwrap(), 600.0);
    load(&mut sync);
    assert_eq!(sync.media().position(), 0.0);
}

#[test]
fn playback_works_with_storage_disabled() {
    let mut sync = session(DisabledStore, 600.0);
    load(&mut sync);
    play_for(&mut sync, 3.0);

    assert_eq!(sync.media().position(), 3.0);
    assert_eq!(sync.view().current_time, "00:00:03");
    assert_eq!(sync.view().duration, "00:10:00");
}

#[test]
fn corrupt_store_file_is_reported() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("positions.json");
    std::fs::write(&path, "[1, 2").unwrap();

    assert!(JsonFileStore::open(&path).is_err());
}
