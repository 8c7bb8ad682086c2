//! Host playback primitive abstraction
//!
//! The player never decodes media itself. Everything it does goes through a
//! [`MediaElement`]: play/pause, position, duration, volume, rate and the
//! visibility of built-in text tracks. State changes are reported back as
//! [`MediaEvent`]s which the host queues and the player drains.

mod clock;

pub use clock::ClockMedia;

/// Notification emitted by a media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Playback started or resumed
    Play,
    /// Playback paused (by the user or at end of media)
    Pause,
    /// Playback stalled waiting for data
    Waiting,
    /// Current position changed (high frequency while playing)
    TimeUpdate,
    /// Duration changed
    DurationChange,
    /// Duration and track metadata are now known
    LoadedMetadata,
}

/// Visibility mode of a text track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackMode {
    /// Track is loaded and rendered
    Showing,
    /// Track is loaded but not rendered
    Hidden,
    /// Track is ignored entirely
    Disabled,
}

/// A built-in text track (captions or subtitles).
#[derive(Debug, Clone, PartialEq)]
pub struct TextTrack {
    /// Display label, e.g. "English"
    pub label: String,
    /// BCP 47 language tag
    pub language: String,
    /// Current visibility mode
    pub mode: TrackMode,
}

impl TextTrack {
    /// Create a track in the disabled state.
    pub fn new(label: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            language: language.into(),
            mode: TrackMode::Disabled,
        }
    }

    /// Whether the track is currently rendered.
    pub fn is_showing(&self) -> bool {
        self.mode == TrackMode::Showing
    }
}

/// Control surface of a host media-playback primitive.
///
/// Setters are fire-and-forget: implementations apply what they can and
/// never report failure back to the caller. `duration` returns a non-finite
/// value (NaN) until metadata has loaded.
pub trait MediaElement {
    /// Start or resume playback.
    fn play(&mut self);

    /// Pause playback.
    fn pause(&mut self);

    /// Whether playback is paused.
    fn paused(&self) -> bool;

    /// Current position in seconds.
    fn position(&self) -> f64;

    /// Seek to a position in seconds.
    fn set_position(&mut self, seconds: f64);

    /// Total duration in seconds, NaN before metadata loads.
    fn duration(&self) -> f64;

    /// Volume in `[0, 1]`.
    fn volume(&self) -> f64;

    /// Set volume; values outside `[0, 1]` are clamped.
    fn set_volume(&mut self, volume: f64);

    /// Playback rate multiplier (1.0 = normal).
    fn rate(&self) -> f64;

    /// Set playback rate.
    fn set_rate(&mut self, rate: f64);

    /// Built-in text tracks.
    fn text_tracks(&self) -> &[TextTrack];

    /// Mutable access to built-in text tracks.
    fn text_tracks_mut(&mut self) -> &mut [TextTrack];

    /// Drain queued notifications in the order they were emitted.
    fn take_events(&mut self) -> Vec<MediaEvent>;
}
