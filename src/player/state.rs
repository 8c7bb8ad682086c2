//! Player state management
//!
//! `PlaybackState` is a snapshot mirrored from the media element, never an
//! independent copy. `UiState` holds the few things the terminal surface
//! owns itself: focus, help overlay and the redraw flag.

use ratatui::layout::{Position, Rect};

use crate::fullscreen::Fullscreen;
use crate::media::MediaElement;

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Snapshot of the media element's state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Current position in seconds
    pub position: f64,
    /// Duration in seconds, non-finite before metadata loads
    pub duration: f64,
    /// Volume in `[0, 1]`
    pub volume: f64,
    /// Playback rate multiplier
    pub rate: f64,
    /// Whether playback is paused
    pub paused: bool,
    /// Whether the first text track is showing
    pub captions_visible: bool,
    /// Whether fullscreen is active
    pub fullscreen: bool,
}

impl PlaybackState {
    /// Capture the current state of a media element.
    pub fn capture<M: MediaElement>(media: &M, fullscreen: Option<&Fullscreen>) -> Self {
        Self {
            position: media.position(),
            duration: media.duration(),
            volume: media.volume(),
            rate: media.rate(),
            paused: media.paused(),
            captions_visible: media
                .text_tracks()
                .first()
                .is_some_and(|t| t.is_showing()),
            fullscreen: fullscreen.is_some_and(|f| f.is_fullscreen()),
        }
    }

    /// Whether the duration is known and usable for seeking.
    pub fn has_duration(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }
}

/// Kind of UI element an input event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// The surface itself, nothing focused
    Document,
    /// A push button
    Button,
    /// A range or text input
    Input,
    /// A drop-down selector
    Select,
}

impl ElementKind {
    /// Form fields consume keys themselves, so global shortcuts are off.
    pub fn is_form_field(self) -> bool {
        matches!(self, Self::Input | Self::Select)
    }
}

/// A focusable control on the player surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    PlayPause,
    Back,
    Forward,
    Seek,
    Volume,
    Rate,
    Captions,
    Fullscreen,
    Chapter(usize),
}

impl Control {
    /// Element kind of this control.
    pub fn kind(self) -> ElementKind {
        match self {
            Self::Seek | Self::Volume => ElementKind::Input,
            Self::Rate => ElementKind::Select,
            _ => ElementKind::Button,
        }
    }

    /// Focus order of the controls, chapters last.
    pub fn tab_order(chapter_count: usize) -> Vec<Control> {
        let mut order = vec![
            Self::PlayPause,
            Self::Back,
            Self::Forward,
            Self::Seek,
            Self::Volume,
            Self::Rate,
            Self::Captions,
            Self::Fullscreen,
        ];
        order.extend((0..chapter_count).map(Self::Chapter));
        order
    }
}

/// Screen areas of clickable widgets, recorded by the last render.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    /// The seek bar track (without time labels)
    pub seek: Option<Rect>,
    /// The volume bar track
    pub volume: Option<Rect>,
    /// Buttons and chapter entries
    pub controls: Vec<(Control, Rect)>,
}

impl HitAreas {
    /// Control whose area contains the given cell.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let pos = Position::new(column, row);
        self.controls
            .iter()
            .find(|(_, area)| area.contains(pos))
            .map(|(control, _)| *control)
    }

    /// Fraction `[0, 1]` along `area` of a click at `column`, if the click
    /// lands inside it.
    pub fn fraction_in(area: Option<Rect>, column: u16, row: u16) -> Option<f64> {
        let area = area?;
        if !area.contains(Position::new(column, row)) || area.width == 0 {
            return None;
        }
        let offset = f64::from(column - area.x);
        let span = f64::from(area.width.saturating_sub(1).max(1));
        Some((offset / span).clamp(0.0, 1.0))
    }
}

/// State owned by the terminal surface.
#[derive(Debug)]
pub struct UiState {
    /// Focused control, `None` when the surface itself has focus
    pub focus: Option<Control>,
    /// Whether help overlay is visible
    pub show_help: bool,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
    /// Clickable areas from the last render
    pub hit: HitAreas,
    /// Number of chapters (bounds chapter focus)
    chapter_count: usize,
}

impl UiState {
    /// Create UI state for a surface with `chapter_count` chapters.
    pub fn new(chapter_count: usize) -> Self {
        Self {
            focus: None,
            show_help: false,
            needs_render: true,
            hit: HitAreas::default(),
            chapter_count,
        }
    }

    /// Kind of element that currently receives keys.
    pub fn focused_kind(&self) -> ElementKind {
        self.focus.map_or(ElementKind::Document, Control::kind)
    }

    /// Move focus to the next control, wrapping back to the surface.
    pub fn focus_next(&mut self) {
        let order = Control::tab_order(self.chapter_count);
        self.focus = match self.focus {
            None => order.first().copied(),
            Some(current) => order
                .iter()
                .position(|c| *c == current)
                .and_then(|i| order.get(i + 1).copied()),
        };
        self.needs_render = true;
    }

    /// Move focus to the previous control, wrapping back to the surface.
    pub fn focus_prev(&mut self) {
        let order = Control::tab_order(self.chapter_count);
        self.focus = match self.focus {
            None => order.last().copied(),
            Some(current) => order
                .iter()
                .position(|c| *c == current)
                .and_then(|i| i.checked_sub(1))
                .and_then(|i| order.get(i).copied()),
        };
        self.needs_render = true;
    }

    /// Drop focus back to the surface.
    pub fn blur(&mut self) {
        self.focus = None;
        self.needs_render = true;
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{ClockMedia, TextTrack, TrackMode};
    use std::time::Duration;

    #[test]
    fn capture_before_metadata_has_no_duration() {
        let media = ClockMedia::new(100.0);
        let state = PlaybackState::capture(&media, None);

        assert!(state.duration.is_nan());
        assert!(!state.has_duration());
        assert!(state.paused);
        assert!(!state.captions_visible);
        assert!(!state.fullscreen);
    }

    #[test]
    fn capture_reflects_first_track() {
        let mut track = TextTrack::new("English", "en");
        track.mode = TrackMode::Showing;
        let mut media = ClockMedia::new(100.0).with_text_track(track);
        media.tick(Duration::ZERO);

        let state = PlaybackState::capture(&media, None);
        assert!(state.captions_visible);
        assert!(state.has_duration());
    }

    #[test]
    fn form_fields_are_input_and_select() {
        assert!(ElementKind::Input.is_form_field());
        assert!(ElementKind::Select.is_form_field());
        assert!(!ElementKind::Button.is_form_field());
        assert!(!ElementKind::Document.is_form_field());
    }

    #[test]
    fn control_kinds() {
        assert_eq!(Control::Seek.kind(), ElementKind::Input);
        assert_eq!(Control::Volume.kind(), ElementKind::Input);
        assert_eq!(Control::Rate.kind(), ElementKind::Select);
        assert_eq!(Control::Chapter(2).kind(), ElementKind::Button);
    }

    #[test]
    fn focus_next_cycles_through_controls_and_back() {
        let mut ui = UiState::new(1);
        let total = Control::tab_order(1).len();

        for _ in 0..total {
            ui.focus_next();
            assert!(ui.focus.is_some());
        }
        assert_eq!(ui.focus, Some(Control::Chapter(0)));

        ui.focus_next();
        assert_eq!(ui.focus, None);
        assert_eq!(ui.focused_kind(), ElementKind::Document);
    }

    #[test]
    fn focus_prev_wraps_to_last() {
        let mut ui = UiState::new(2);
        ui.focus_prev();
        assert_eq!(ui.focus, Some(Control::Chapter(1)));

        ui.focus = Some(Control::PlayPause);
        ui.focus_prev();
        assert_eq!(ui.focus, None);
    }

    #[test]
    fn control_at_finds_recorded_area() {
        let hit = HitAreas {
            controls: vec![
                (Control::PlayPause, Rect::new(0, 5, 8, 1)),
                (Control::Chapter(0), Rect::new(2, 9, 20, 1)),
            ],
            ..HitAreas::default()
        };
        assert_eq!(hit.control_at(3, 5), Some(Control::PlayPause));
        assert_eq!(hit.control_at(10, 9), Some(Control::Chapter(0)));
        assert_eq!(hit.control_at(30, 9), None);
    }

    #[test]
    fn fraction_in_maps_columns() {
        let area = Some(Rect::new(10, 3, 101, 1));
        assert_eq!(HitAreas::fraction_in(area, 10, 3), Some(0.0));
        assert_eq!(HitAreas::fraction_in(area, 60, 3), Some(0.5));
        assert_eq!(HitAreas::fraction_in(area, 110, 3), Some(1.0));
        assert_eq!(HitAreas::fraction_in(area, 60, 4), None);
        assert_eq!(HitAreas::fraction_in(None, 60, 3), None);
    }

    #[test]
    fn toggle_help_flips() {
        let mut ui = UiState::new(0);
        ui.needs_render = false;
        ui.toggle_help();
        assert!(ui.show_help);
        assert!(ui.needs_render);
    }
}
