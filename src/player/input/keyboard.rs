//! Keyboard input handling for the player.
//!
//! Keys are handled in three layers:
//! - surface keys (Tab focus movement, Esc, quit, help) always work;
//! - a focused form field (seek slider, volume slider, rate selector)
//!   consumes the remaining keys itself and global shortcuts are skipped;
//! - otherwise the key is looked up in the shortcut table.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::PlaybackConfig;
use crate::media::MediaElement;
use crate::player::state::{Control, ElementKind, InputResult, UiState};
use crate::player::sync::{step_rate_option, PlaybackSync, SLIDER_RANGE};
use crate::store::PositionStore;

/// Seek slider movement per arrow key when the slider has focus.
const SEEK_WIDGET_STEP: f64 = 10.0;
/// Volume slider movement per arrow key when the slider has focus.
const VOLUME_WIDGET_STEP: f64 = 0.05;

/// A global keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlay,
    SkipBack,
    SkipForward,
    VolumeUp,
    VolumeDown,
    ToggleFullscreen,
    ToggleCaptions,
    RateUp,
    RateDown,
}

impl Shortcut {
    /// Look up the shortcut bound to a key.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        let shortcut = match key.code {
            KeyCode::Char(' ') => Self::TogglePlay,
            KeyCode::Left => Self::SkipBack,
            KeyCode::Right => Self::SkipForward,
            KeyCode::Up => Self::VolumeUp,
            KeyCode::Down => Self::VolumeDown,
            KeyCode::Char('f') | KeyCode::Char('F') => Self::ToggleFullscreen,
            KeyCode::Char('c') | KeyCode::Char('C') => Self::ToggleCaptions,
            KeyCode::Char('>') | KeyCode::Char('.') => Self::RateUp,
            KeyCode::Char('<') | KeyCode::Char(',') => Self::RateDown,
            _ => return None,
        };
        Some(shortcut)
    }
}

/// Apply a global shortcut.
pub fn apply_shortcut<M: MediaElement, S: PositionStore>(
    shortcut: Shortcut,
    sync: &mut PlaybackSync<M, S>,
    settings: &PlaybackConfig,
) {
    match shortcut {
        Shortcut::TogglePlay => sync.toggle_play_pause(),
        Shortcut::SkipBack => sync.skip_by(-settings.arrow_skip),
        Shortcut::SkipForward => sync.skip_by(settings.arrow_skip),
        Shortcut::VolumeUp => sync.adjust_volume(settings.volume_step),
        Shortcut::VolumeDown => sync.adjust_volume(-settings.volume_step),
        Shortcut::ToggleFullscreen => sync.toggle_fullscreen(),
        Shortcut::ToggleCaptions => sync.toggle_captions(),
        Shortcut::RateUp => sync.adjust_rate(settings.rate_step),
        Shortcut::RateDown => sync.adjust_rate(-settings.rate_step),
    }
}

/// Run the shortcut bound to `key` unless `target` is a form field.
///
/// Returns true if a shortcut was applied.
pub fn dispatch_shortcut<M: MediaElement, S: PositionStore>(
    key: &KeyEvent,
    target: ElementKind,
    sync: &mut PlaybackSync<M, S>,
    settings: &PlaybackConfig,
) -> bool {
    if target.is_form_field() {
        return false;
    }
    match Shortcut::from_key(key) {
        Some(shortcut) => {
            apply_shortcut(shortcut, sync, settings);
            true
        }
        None => false,
    }
}

/// Activate a control as if it were clicked.
pub fn activate_control<M: MediaElement, S: PositionStore>(
    control: Control,
    sync: &mut PlaybackSync<M, S>,
    settings: &PlaybackConfig,
) {
    match control {
        Control::PlayPause => sync.toggle_play_pause(),
        Control::Back => sync.skip_by(-settings.back_skip),
        Control::Forward => sync.skip_by(settings.forward_skip),
        Control::Captions => sync.toggle_captions(),
        Control::Fullscreen => sync.toggle_fullscreen(),
        Control::Chapter(index) => sync.jump_to_chapter(index),
        Control::Seek | Control::Volume | Control::Rate => {}
    }
}

/// Handle a keyboard event.
///
/// This is the main keyboard input handler that processes all key events
/// and updates state or returns control flow signals.
pub fn handle_key_event<M: MediaElement, S: PositionStore>(
    key: KeyEvent,
    ui: &mut UiState,
    sync: &mut PlaybackSync<M, S>,
    settings: &PlaybackConfig,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if ui.show_help {
        ui.show_help = false;
        ui.needs_render = true;
        return InputResult::Continue;
    }

    ui.needs_render = true;
    let target = ui.focused_kind();

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return InputResult::Quit
        }
        KeyCode::Tab => {
            ui.focus_next();
            return InputResult::Continue;
        }
        KeyCode::BackTab => {
            ui.focus_prev();
            return InputResult::Continue;
        }
        KeyCode::Esc => {
            if ui.focus.is_some() {
                ui.blur();
                return InputResult::Continue;
            }
            return InputResult::Quit;
        }
        _ => {}
    }

    if target.is_form_field() {
        if let Some(control) = ui.focus {
            handle_widget_key(control, &key, sync);
        }
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') => return InputResult::Quit,
        KeyCode::Char('?') => {
            ui.toggle_help();
            return InputResult::Continue;
        }
        KeyCode::Enter => {
            if let Some(control) = ui.focus {
                activate_control(control, sync, settings);
            }
            return InputResult::Continue;
        }
        _ => {}
    }

    dispatch_shortcut(&key, target, sync, settings);
    InputResult::Continue
}

/// Keys consumed by a focused form field.
fn handle_widget_key<M: MediaElement, S: PositionStore>(
    control: Control,
    key: &KeyEvent,
    sync: &mut PlaybackSync<M, S>,
) {
    match control {
        Control::Seek => {
            let current = f64::from(sync.view().seek);
            let target = match key.code {
                KeyCode::Left | KeyCode::Down => current - SEEK_WIDGET_STEP,
                KeyCode::Right | KeyCode::Up => current + SEEK_WIDGET_STEP,
                KeyCode::Home => 0.0,
                KeyCode::End => f64::from(SLIDER_RANGE),
                _ => return,
            };
            sync.seek_to(target);
        }
        Control::Volume => {
            let volume = sync.media().volume();
            match key.code {
                KeyCode::Left | KeyCode::Down => sync.set_volume(volume - VOLUME_WIDGET_STEP),
                KeyCode::Right | KeyCode::Up => sync.set_volume(volume + VOLUME_WIDGET_STEP),
                KeyCode::Home => sync.set_volume(0.0),
                KeyCode::End => sync.set_volume(1.0),
                _ => {}
            }
        }
        Control::Rate => {
            let step = match key.code {
                KeyCode::Left | KeyCode::Up => -1,
                KeyCode::Right | KeyCode::Down => 1,
                _ => return,
            };
            let rate = step_rate_option(sync.media().rate(), step);
            sync.set_rate(rate);
        }
        _ => {}
    }
}
