//! Shared helpers for integration tests

use std::path::Path;
use std::time::Duration;

use assert_cmd::Command;
use tempfile::TempDir;

use vidctl::media::{ClockMedia, MediaElement, TextTrack};
use vidctl::player::chapters::default_chapters;
use vidctl::player::{PlaybackSync, PlayerContext};
use vidctl::store::PositionStore;

/// Storage key used by library-level tests.
pub const KEY: &str = "integration_position";

/// Isolated config and data directories for one CLI run.
pub struct Sandbox {
    pub config: TempDir,
    pub data: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            config: TempDir::new().expect("config dir"),
            data: TempDir::new().expect("data dir"),
        }
    }

    /// A `vidctl` command pointed at the sandbox directories.
    pub fn vidctl(&self) -> Command {
        let mut cmd = Command::cargo_bin("vidctl").expect("vidctl binary");
        cmd.env("VIDCTL_CONFIG_DIR", self.config.path())
            .env("VIDCTL_DATA_DIR", self.data.path())
            .env("NO_COLOR", "1")
            .env_remove("VIDCTL_LOG");
        cmd
    }

    pub fn store_path(&self) -> std::path::PathBuf {
        self.data.path().join("positions.json")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config.path().join("config.toml"), content).expect("write config");
    }
}

/// Build a sync layer over a fresh clock media element.
pub fn session<S: PositionStore>(store: S, duration: f64) -> PlaybackSync<ClockMedia, S> {
    let media = ClockMedia::new(duration).with_text_track(TextTrack::new("English", "en"));
    let ctx = PlayerContext::new(media, store, None);
    let mut sync = PlaybackSync::new(ctx, KEY, default_chapters());
    sync.init_tracks();
    sync
}

/// Load metadata on a clock-driven session.
pub fn load<S: PositionStore>(sync: &mut PlaybackSync<ClockMedia, S>) {
    sync.media_mut().tick(Duration::ZERO);
    sync.pump_events();
}

/// Play for `secs` of wall-clock time in one tick.
pub fn play_for<S: PositionStore>(sync: &mut PlaybackSync<ClockMedia, S>, secs: f64) {
    if sync.media().paused() {
        sync.toggle_play_pause();
    }
    sync.media_mut().tick(Duration::from_secs_f64(secs));
    sync.pump_events();
}

/// Whether a file exists and is non-empty.
pub fn non_empty(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}
