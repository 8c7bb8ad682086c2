//! Playback-state synchronization and persistence.
//!
//! `PlaybackSync` sits between the media element and everything else. It
//! translates control requests into property sets on the element, reacts to
//! the element's notifications by refreshing the derived view text, and
//! keeps the last position in a [`PositionStore`] so the next session can
//! resume where this one stopped.
//!
//! Store access is best-effort: every store call returns a `Result` and
//! this module decides, at each call site, to drop the error after logging
//! it. Playback never depends on the store working.

use tracing::{debug, info};

use crate::fullscreen::Fullscreen;
use crate::media::{MediaElement, MediaEvent, TrackMode};
use crate::player::chapters::Chapter;
use crate::player::format::fmt_time;
use crate::player::state::PlaybackState;
use crate::store::PositionStore;

/// Resolution of the seek slider.
pub const SLIDER_RANGE: u16 = 1000;
/// Distance kept from the end of media when skipping or jumping.
pub const END_MARGIN: f64 = 0.1;
/// Lowest playback rate reachable from the controls.
pub const MIN_RATE: f64 = 0.5;
/// Highest playback rate reachable from the controls.
pub const MAX_RATE: f64 = 2.0;
/// Choices offered by the rate selector.
pub const RATE_OPTIONS: [f64; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];
/// Duration label shown before metadata loads.
pub const DURATION_PLACEHOLDER: &str = "--:--:--";

/// Upper bound on notification batches handled by one `pump_events` call.
const MAX_EVENT_ROUNDS: usize = 8;

/// Text and values shown by the control widgets.
///
/// Time labels and the seek slider are recomputed from the media element on
/// every update and never edited directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlView {
    /// Current position label
    pub current_time: String,
    /// Duration label
    pub duration: String,
    /// Seek slider value in `0..=SLIDER_RANGE`
    pub seek: u16,
    /// One-line status message
    pub status: String,
}

impl Default for ControlView {
    fn default() -> Self {
        Self {
            current_time: fmt_time(0.0),
            duration: DURATION_PLACEHOLDER.to_string(),
            seek: 0,
            status: String::new(),
        }
    }
}

/// Everything the player talks to, constructed by the host.
#[derive(Debug)]
pub struct PlayerContext<M, S> {
    /// The playback primitive
    pub media: M,
    /// Where the last position is persisted
    pub store: S,
    /// Resolved fullscreen capability, if any
    pub fullscreen: Option<Fullscreen>,
    /// Widget values
    pub view: ControlView,
}

impl<M, S> PlayerContext<M, S> {
    /// Create a context with an empty view.
    pub fn new(media: M, store: S, fullscreen: Option<Fullscreen>) -> Self {
        Self {
            media,
            store,
            fullscreen,
            view: ControlView::default(),
        }
    }
}

/// Map a position to a seek slider value.
///
/// Returns `None` while the duration is unknown or zero.
pub fn slider_value(position: f64, duration: f64) -> Option<u16> {
    if !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    let value = (position / duration * f64::from(SLIDER_RANGE)).round();
    Some(value.clamp(0.0, f64::from(SLIDER_RANGE)) as u16)
}

/// Map a seek slider value to a position.
///
/// Returns `None` while the duration is unknown or zero.
pub fn slider_position(value: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    let value = value.clamp(0.0, f64::from(SLIDER_RANGE));
    Some(value / f64::from(SLIDER_RANGE) * duration)
}

/// Rate selector option `step` entries away from the one closest to
/// `current`, saturating at both ends.
pub fn step_rate_option(current: f64, step: isize) -> f64 {
    let closest = RATE_OPTIONS
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - current).abs().total_cmp(&(*b - current).abs()))
        .map_or(2, |(i, _)| i);
    let index = closest
        .saturating_add_signed(step)
        .min(RATE_OPTIONS.len() - 1);
    RATE_OPTIONS[index]
}

/// Parse a persisted position, accepting only values strictly inside
/// `(0, duration)`.
pub fn parse_resume_position(raw: &str, duration: f64) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value > 0.0 && value < duration).then_some(value)
}

/// Keeps the media element, the view and the position store in step.
#[derive(Debug)]
pub struct PlaybackSync<M, S> {
    ctx: PlayerContext<M, S>,
    storage_key: String,
    chapters: Vec<Chapter>,
}

impl<M: MediaElement, S: PositionStore> PlaybackSync<M, S> {
    /// Create a sync layer over `ctx`, persisting under `storage_key`.
    pub fn new(
        ctx: PlayerContext<M, S>,
        storage_key: impl Into<String>,
        chapters: Vec<Chapter>,
    ) -> Self {
        Self {
            ctx,
            storage_key: storage_key.into(),
            chapters,
        }
    }

    /// The media element.
    pub fn media(&self) -> &M {
        &self.ctx.media
    }

    /// Mutable access to the media element (for the host clock).
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.ctx.media
    }

    /// The position store.
    pub fn store(&self) -> &S {
        &self.ctx.store
    }

    /// Current widget values.
    pub fn view(&self) -> &ControlView {
        &self.ctx.view
    }

    /// Chapter list.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Whether a fullscreen capability was resolved.
    pub fn has_fullscreen(&self) -> bool {
        self.ctx.fullscreen.is_some()
    }

    /// Snapshot of the media element's state.
    pub fn state(&self) -> PlaybackState {
        PlaybackState::capture(&self.ctx.media, self.ctx.fullscreen.as_ref())
    }

    /// Give the context back to the host.
    pub fn into_context(self) -> PlayerContext<M, S> {
        self.ctx
    }

    /// Hide every text track; captions start off.
    pub fn init_tracks(&mut self) {
        for track in self.ctx.media.text_tracks_mut() {
            track.mode = TrackMode::Hidden;
        }
    }

    /// Drain and handle the media element's pending notifications.
    ///
    /// Handlers may cause further notifications (a resume seek emits a
    /// position update), so batches are drained until the queue is empty.
    /// Returns the number of notifications handled.
    pub fn pump_events(&mut self) -> usize {
        let mut handled = 0;
        for _ in 0..MAX_EVENT_ROUNDS {
            let events = self.ctx.media.take_events();
            if events.is_empty() {
                break;
            }
            handled += events.len();
            for event in events {
                self.on_media_event(event);
            }
        }
        handled
    }

    /// Handle one notification from the media element.
    pub fn on_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::Play => self.set_status("Playing"),
            MediaEvent::Pause => self.set_status("Paused"),
            MediaEvent::Waiting => self.set_status("Buffering…"),
            MediaEvent::TimeUpdate => self.on_position_changed(),
            MediaEvent::DurationChange => self.on_duration_changed(),
            MediaEvent::LoadedMetadata => self.on_metadata_loaded(),
        }
    }

    /// Duration became known: refresh labels and resume a saved position.
    pub fn on_metadata_loaded(&mut self) {
        self.update_time_ui();
        self.restore_position();
    }

    /// Position moved: refresh labels and persist the new position.
    pub fn on_position_changed(&mut self) {
        self.update_time_ui();
        self.persist_position();
    }

    /// Duration changed: refresh labels.
    pub fn on_duration_changed(&mut self) {
        self.update_time_ui();
    }

    /// Seek to a slider value in `0..=SLIDER_RANGE`.
    ///
    /// Ignored until the duration is known.
    pub fn seek_to(&mut self, slider: f64) {
        if let Some(target) = slider_position(slider, self.ctx.media.duration()) {
            self.ctx.media.set_position(target);
        }
    }

    /// Move the position by `delta` seconds, staying inside
    /// `[0, duration - END_MARGIN]`.
    pub fn skip_by(&mut self, delta: f64) {
        let duration = self.ctx.media.duration();
        let mut target = self.ctx.media.position() + delta;
        if duration.is_finite() {
            target = target.min(duration - END_MARGIN);
        }
        self.ctx.media.set_position(target.max(0.0));
    }

    /// Play when paused, pause otherwise.
    pub fn toggle_play_pause(&mut self) {
        if self.ctx.media.paused() {
            self.ctx.media.play();
        } else {
            self.ctx.media.pause();
        }
    }

    /// Set the volume, clamped to `[0, 1]`.
    pub fn set_volume(&mut self, volume: f64) {
        self.ctx.media.set_volume(volume.clamp(0.0, 1.0));
    }

    /// Change the volume by `delta`.
    pub fn adjust_volume(&mut self, delta: f64) {
        let volume = self.ctx.media.volume() + delta;
        self.set_volume(volume);
    }

    /// Set the playback rate, clamped to `[MIN_RATE, MAX_RATE]`.
    pub fn set_rate(&mut self, rate: f64) {
        self.ctx.media.set_rate(rate.clamp(MIN_RATE, MAX_RATE));
    }

    /// Change the playback rate by `delta`.
    pub fn adjust_rate(&mut self, delta: f64) {
        let rate = self.ctx.media.rate() + delta;
        self.set_rate(rate);
    }

    /// Show or hide the first text track.
    pub fn toggle_captions(&mut self) {
        let Some(track) = self.ctx.media.text_tracks_mut().first_mut() else {
            return;
        };
        track.mode = if track.is_showing() {
            TrackMode::Hidden
        } else {
            TrackMode::Showing
        };
        let status = if track.is_showing() {
            "Captions: On"
        } else {
            "Captions: Off"
        };
        self.set_status(status);
    }

    /// Leave fullscreen if active, enter it otherwise.
    pub fn toggle_fullscreen(&mut self) {
        let Some(fullscreen) = self.ctx.fullscreen.as_mut() else {
            return;
        };
        if let Err(e) = fullscreen.toggle() {
            debug!(error = ?e, "fullscreen toggle failed");
        }
    }

    /// Seek to a chapter and start playback.
    pub fn jump_to_chapter(&mut self, index: usize) {
        let Some(chapter) = self.chapters.get(index) else {
            return;
        };
        let target = chapter.seek_target(self.ctx.media.duration());
        self.ctx.media.set_position(target);
        self.ctx.media.play();
    }

    fn set_status(&mut self, status: &str) {
        self.ctx.view.status = status.to_string();
    }

    fn update_time_ui(&mut self) {
        let position = self.ctx.media.position();
        let duration = self.ctx.media.duration();

        self.ctx.view.current_time = fmt_time(position);
        self.ctx.view.duration = if duration.is_finite() {
            fmt_time(duration)
        } else {
            DURATION_PLACEHOLDER.to_string()
        };
        if let Some(value) = slider_value(position, duration) {
            self.ctx.view.seek = value;
        }
    }

    fn restore_position(&mut self) {
        let saved = match self.ctx.store.get(&self.storage_key) {
            Ok(Some(saved)) => saved,
            Ok(None) => return,
            Err(e) => {
                debug!(error = %e, "position store unavailable, starting from 0");
                return;
            }
        };

        let duration = self.ctx.media.duration();
        match parse_resume_position(&saved, duration) {
            Some(position) => {
                self.ctx.media.set_position(position);
                let status = format!("Resumed at {}", fmt_time(position));
                info!(position, "{}", status);
                self.ctx.view.status = status;
            }
            None => {
                debug!(saved = %saved, duration, "ignoring saved position outside media");
            }
        }
    }

    fn persist_position(&mut self) {
        let position = self.ctx.media.position().to_string();
        if let Err(e) = self.ctx.store.set(&self.storage_key, &position) {
            debug!(error = %e, "failed to persist position");
        }
    }
}
