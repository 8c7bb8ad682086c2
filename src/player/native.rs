//! Terminal front end for the player.
//!
//! Owns the terminal (raw mode, alternate screen, mouse capture), drives
//! the [`ClockMedia`] clock and routes input to the sync layer.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::fullscreen::Fullscreen;
use crate::media::{ClockMedia, MediaElement, TextTrack};
use crate::player::input::handle_event;
use crate::player::render;
use crate::player::state::{InputResult, UiState};
use crate::player::sync::{PlaybackSync, PlayerContext};
use crate::store::{DisabledStore, JsonFileStore, MemoryStore, PositionStore, StoreError};
use crate::theme::current_theme;

/// Interval between clock ticks.
const TICK: Duration = Duration::from_millis(250);

/// Options for one playback session.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Media length in seconds
    pub duration: f64,
    /// Title shown in the frame border
    pub title: String,
    /// Attach an English caption track
    pub captions: bool,
    /// Resume from the persisted position
    pub resume: bool,
}

/// How a playback session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackResult {
    /// Playback reached the end of the media
    Ended,
    /// User quit at the given position (seconds)
    Stopped(f64),
}

/// Restores the terminal when dropped, even on early return.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Open the persistent position store.
///
/// Falls back to an in-memory store when no data directory can be
/// determined. A corrupt file is replaced by an empty store; any other
/// failure disables storage for the session.
pub fn open_store() -> Box<dyn PositionStore> {
    let path = match Config::store_path() {
        Ok(path) => path,
        Err(e) => {
            warn!(error = %e, "no data directory, positions will not persist");
            return Box::new(MemoryStore::new());
        }
    };
    let opened = match JsonFileStore::open(&path) {
        Err(e @ StoreError::Corrupt { .. }) => {
            warn!(error = %e, "discarding corrupt position store");
            JsonFileStore::reset(&path)
        }
        other => other,
    };
    match opened {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(error = %e, "position store unavailable");
            Box::new(DisabledStore)
        }
    }
}

/// Build the sync layer for a session.
///
/// With `resume` off the stored position is dropped first, so playback
/// starts from the beginning and later positions are still saved.
pub fn build_session<S: PositionStore>(
    options: &PlayOptions,
    config: &Config,
    mut store: S,
    fullscreen: Option<Fullscreen>,
) -> PlaybackSync<ClockMedia, S> {
    let mut media = ClockMedia::new(options.duration);
    if options.captions {
        media = media.with_text_track(TextTrack::new("English", "en"));
    }

    let key = config.playback.storage_key.as_str();
    if !options.resume {
        if let Err(e) = store.remove(key) {
            debug!(error = %e, "could not drop stored position");
        }
    }

    let ctx = PlayerContext::new(media, store, fullscreen);
    let mut sync = PlaybackSync::new(ctx, key, config.chapters());
    sync.init_tracks();
    sync
}

/// Play a movie in the terminal until it ends or the user quits.
pub fn play_movie(options: &PlayOptions, config: &Config) -> Result<PlaybackResult> {
    let fullscreen = if config.fullscreen.enabled {
        Fullscreen::detect()
    } else {
        None
    };
    if let Some(fs) = &fullscreen {
        info!(method = fs.method().name(), "fullscreen available");
    }

    let mut sync = build_session(options, config, open_store(), fullscreen);
    let mut ui = UiState::new(sync.chapters().len());
    let theme = current_theme();
    let settings = config.playback.clone();

    info!(duration = options.duration, title = %options.title, "starting playback");

    let mut guard = TerminalGuard::new()?;
    let mut last_tick = Instant::now();

    loop {
        if ui.needs_render {
            guard.terminal.draw(|frame| {
                render::draw(frame, &sync, &mut ui, &options.title, &settings, &theme)
            })?;
            ui.needs_render = false;
        }

        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let ev = event::read()?;
            if handle_event(ev, &mut ui, &mut sync, &settings) == InputResult::Quit {
                break;
            }
        }

        if last_tick.elapsed() >= TICK {
            let now = Instant::now();
            sync.media_mut().tick(now - last_tick);
            last_tick = now;
        }
        if sync.pump_events() > 0 {
            ui.needs_render = true;
        }
    }

    guard.restore()?;

    let ended = sync.media().ended();
    let position = sync.media().position();
    let mut ctx = sync.into_context();
    if let Some(fs) = ctx.fullscreen.as_mut() {
        if fs.is_fullscreen() {
            if let Err(e) = fs.exit() {
                debug!(error = ?e, "could not leave fullscreen");
            }
        }
    }

    info!(position, ended, "playback finished");
    Ok(if ended {
        PlaybackResult::Ended
    } else {
        PlaybackResult::Stopped(position)
    })
}
