//! Wall-clock driven media element
//!
//! `ClockMedia` behaves like a media element whose content is already
//! buffered: metadata arrives on the first tick, and the position advances
//! with elapsed time scaled by the playback rate. The terminal front end
//! uses it as its host primitive.

use std::collections::VecDeque;
use std::time::Duration;

use super::{MediaElement, MediaEvent, TextTrack};

/// Media element driven by explicit clock ticks.
#[derive(Debug)]
pub struct ClockMedia {
    /// Duration reported once metadata has loaded
    media_duration: f64,
    loaded: bool,
    position: f64,
    volume: f64,
    rate: f64,
    paused: bool,
    tracks: Vec<TextTrack>,
    events: VecDeque<MediaEvent>,
}

impl ClockMedia {
    /// Create a paused element for media of the given length in seconds.
    pub fn new(duration_secs: f64) -> Self {
        Self {
            media_duration: duration_secs.max(0.0),
            loaded: false,
            position: 0.0,
            volume: 1.0,
            rate: 1.0,
            paused: true,
            tracks: Vec::new(),
            events: VecDeque::new(),
        }
    }

    /// Attach a built-in text track.
    pub fn with_text_track(mut self, track: TextTrack) -> Self {
        self.tracks.push(track);
        self
    }

    /// Advance the clock.
    ///
    /// The first tick loads metadata and does not move the position.
    /// Later ticks move the position while playing and emit `TimeUpdate`;
    /// reaching the end pauses playback.
    pub fn tick(&mut self, elapsed: Duration) {
        if !self.loaded {
            self.loaded = true;
            self.events.push_back(MediaEvent::DurationChange);
            self.events.push_back(MediaEvent::LoadedMetadata);
            return;
        }

        if self.paused {
            return;
        }

        self.position += elapsed.as_secs_f64() * self.rate;
        if self.position >= self.media_duration {
            self.position = self.media_duration;
            self.paused = true;
            self.events.push_back(MediaEvent::TimeUpdate);
            self.events.push_back(MediaEvent::Pause);
        } else {
            self.events.push_back(MediaEvent::TimeUpdate);
        }
    }

    /// Whether the position sits at the end of the media.
    pub fn ended(&self) -> bool {
        self.loaded && self.position >= self.media_duration
    }
}

impl MediaElement for ClockMedia {
    fn play(&mut self) {
        if self.ended() {
            self.position = 0.0;
        }
        if self.paused {
            self.paused = false;
            self.events.push_back(MediaEvent::Play);
        }
        if !self.loaded {
            self.events.push_back(MediaEvent::Waiting);
        }
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.events.push_back(MediaEvent::Pause);
        }
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        let upper = if self.loaded {
            self.media_duration
        } else {
            f64::INFINITY
        };
        self.position = seconds.clamp(0.0, upper);
        self.events.push_back(MediaEvent::TimeUpdate);
    }

    fn duration(&self) -> f64 {
        if self.loaded {
            self.media_duration
        } else {
            f64::NAN
        }
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        if volume.is_finite() {
            self.volume = volume.clamp(0.0, 1.0);
        }
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn set_rate(&mut self, rate: f64) {
        if rate.is_finite() && rate > 0.0 {
            self.rate = rate;
        }
    }

    fn text_tracks(&self) -> &[TextTrack] {
        &self.tracks
    }

    fn text_tracks_mut(&mut self) -> &mut [TextTrack] {
        &mut self.tracks
    }

    fn take_events(&mut self) -> Vec<MediaEvent> {
        self.events.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(duration: f64) -> ClockMedia {
        let mut media = ClockMedia::new(duration);
        media.tick(Duration::ZERO);
        media.take_events();
        media
    }

    #[test]
    fn duration_is_nan_before_first_tick() {
        let media = ClockMedia::new(100.0);
        assert!(media.duration().is_nan());
        assert!(!media.ended());
    }

    #[test]
    fn first_tick_loads_metadata() {
        let mut media = ClockMedia::new(100.0);
        media.tick(Duration::from_millis(250));

        assert_eq!(media.duration(), 100.0);
        assert_eq!(media.position(), 0.0);
        assert_eq!(
            media.take_events(),
            vec![MediaEvent::DurationChange, MediaEvent::LoadedMetadata]
        );
    }

    #[test]
    fn play_before_load_reports_waiting() {
        let mut media = ClockMedia::new(100.0);
        media.play();
        assert_eq!(
            media.take_events(),
            vec![MediaEvent::Play, MediaEvent::Waiting]
        );
    }

    #[test]
    fn position_advances_with_rate() {
        let mut media = loaded(100.0);
        media.set_rate(2.0);
        media.play();
        media.tick(Duration::from_secs(3));

        assert!((media.position() - 6.0).abs() < 1e-9);
        assert_eq!(
            media.take_events(),
            vec![MediaEvent::Play, MediaEvent::TimeUpdate]
        );
    }

    #[test]
    fn paused_element_does_not_advance() {
        let mut media = loaded(100.0);
        media.tick(Duration::from_secs(5));
        assert_eq!(media.position(), 0.0);
        assert!(media.take_events().is_empty());
    }

    #[test]
    fn reaching_end_pauses() {
        let mut media = loaded(10.0);
        media.play();
        media.tick(Duration::from_secs(20));

        assert_eq!(media.position(), 10.0);
        assert!(media.paused());
        assert!(media.ended());
        let events = media.take_events();
        assert_eq!(events.last(), Some(&MediaEvent::Pause));
    }

    #[test]
    fn play_after_end_restarts() {
        let mut media = loaded(10.0);
        media.set_position(10.0);
        media.play();
        assert_eq!(media.position(), 0.0);
    }

    #[test]
    fn set_position_clamps_to_duration() {
        let mut media = loaded(10.0);
        media.set_position(50.0);
        assert_eq!(media.position(), 10.0);
        media.set_position(-3.0);
        assert_eq!(media.position(), 0.0);
    }

    #[test]
    fn set_volume_clamps() {
        let mut media = loaded(10.0);
        media.set_volume(1.7);
        assert_eq!(media.volume(), 1.0);
        media.set_volume(-0.2);
        assert_eq!(media.volume(), 0.0);
    }

    #[test]
    fn set_rate_ignores_invalid_values() {
        let mut media = loaded(10.0);
        media.set_rate(0.0);
        media.set_rate(f64::NAN);
        assert_eq!(media.rate(), 1.0);
    }

    #[test]
    fn pause_twice_emits_once() {
        let mut media = loaded(10.0);
        media.play();
        media.take_events();
        media.pause();
        media.pause();
        assert_eq!(media.take_events(), vec![MediaEvent::Pause]);
    }
}
