//! Mouse input handling for the player.
//!
//! Clicks are resolved against the widget areas recorded by the last render:
//! the seek bar seeks, the volume bar sets the volume, and buttons and
//! chapter entries are activated.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::config::PlaybackConfig;
use crate::media::MediaElement;
use crate::player::input::keyboard::activate_control;
use crate::player::state::{HitAreas, InputResult, UiState};
use crate::player::sync::{PlaybackSync, SLIDER_RANGE};
use crate::store::PositionStore;

/// Handle a mouse event.
///
/// Currently handles:
/// - Left click on the seek bar to seek to that position
/// - Left click on the volume bar to set the volume
/// - Left click on a button or chapter to activate it
pub fn handle_mouse_event<M: MediaElement, S: PositionStore>(
    mouse: MouseEvent,
    ui: &mut UiState,
    sync: &mut PlaybackSync<M, S>,
    settings: &PlaybackConfig,
) -> InputResult {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if ui.show_help {
            ui.show_help = false;
        } else if let Some(ratio) = HitAreas::fraction_in(ui.hit.seek, mouse.column, mouse.row) {
            sync.seek_to((ratio * f64::from(SLIDER_RANGE)).round());
        } else if let Some(ratio) = HitAreas::fraction_in(ui.hit.volume, mouse.column, mouse.row) {
            sync.set_volume(ratio);
        } else if let Some(control) = ui.hit.control_at(mouse.column, mouse.row) {
            ui.focus = Some(control);
            activate_control(control, sync, settings);
        }
        ui.needs_render = true;
    }

    InputResult::Continue
}
