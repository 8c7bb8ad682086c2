//! Input handling for the player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::{
    activate_control, apply_shortcut, dispatch_shortcut, handle_key_event, Shortcut,
};
pub use mouse::handle_mouse_event;

use crossterm::event::Event;

use crate::config::PlaybackConfig;
use crate::media::MediaElement;
use crate::player::state::{InputResult, UiState};
use crate::player::sync::PlaybackSync;
use crate::store::PositionStore;

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event<M: MediaElement, S: PositionStore>(
    event: Event,
    ui: &mut UiState,
    sync: &mut PlaybackSync<M, S>,
    settings: &PlaybackConfig,
) -> InputResult {
    match event {
        Event::Key(key) => keyboard::handle_key_event(key, ui, sync, settings),
        Event::Mouse(mouse) => mouse::handle_mouse_event(mouse, ui, sync, settings),
        Event::Resize(_, _) => {
            ui.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, etc.
    }
}
