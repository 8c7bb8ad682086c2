//! Rendering components for the player.
//!
//! `draw` lays out one frame: status line, seek bar, control row, chapter
//! list and footer, plus the help overlay when it is open. It records the
//! screen area of every clickable widget in [`UiState::hit`] so mouse input
//! can be resolved against what was actually drawn.

mod chapters;
mod help;
mod progress;
mod status;

pub use chapters::{build_chapter_lines, render_chapters};
pub use help::{help_area, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{build_seek_bar_chars, render_seek_bar};
pub use status::{
    build_control_row, build_footer_spans, render_control_row, render_footer,
    render_status_line, ControlRow, VOLUME_BAR_WIDTH,
};

use ratatui::{
    layout::{Constraint, Layout},
    widgets::{Block, Borders},
    Frame,
};

use crate::config::PlaybackConfig;
use crate::media::MediaElement;
use crate::player::state::{Control, HitAreas, UiState};
use crate::player::sync::PlaybackSync;
use crate::store::PositionStore;
use crate::theme::Theme;

/// Keybinding hints shown in the footer.
const FOOTER_KEYS: &[(&str, &str)] = &[
    ("Space", "play"),
    ("←/→", "seek"),
    ("↑/↓", "volume"),
    ("Tab", "focus"),
    ("?", "help"),
    ("q", "quit"),
];

/// Draw the whole player and refresh the hit areas.
pub fn draw<M: MediaElement, S: PositionStore>(
    frame: &mut Frame,
    sync: &PlaybackSync<M, S>,
    ui: &mut UiState,
    title: &str,
    settings: &PlaybackConfig,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(theme.text_secondary_style());
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let [status_area, seek_area, controls_area, _, chapters_area, footer_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    let state = sync.state();
    let view = sync.view();
    let has_captions = !sync.media().text_tracks().is_empty();

    render_status_line(frame, status_area, &view.status, state.paused, theme);

    let seek = render_seek_bar(
        frame,
        seek_area,
        view,
        state.duration,
        sync.chapters(),
        ui.focus == Some(Control::Seek),
        theme,
    );

    let row = render_control_row(
        frame,
        controls_area,
        &state,
        has_captions,
        sync.has_fullscreen(),
        settings.back_skip,
        settings.forward_skip,
        ui.focus,
        theme,
    );

    let chapter_areas = render_chapters(
        frame,
        chapters_area,
        sync.chapters(),
        state.position,
        ui.focus,
        theme,
    );

    render_footer(frame, footer_area, FOOTER_KEYS, theme);

    let mut controls = row.areas;
    controls.extend(chapter_areas);
    ui.hit = HitAreas {
        seek: Some(seek),
        volume: row.volume,
        controls,
    };

    if ui.show_help {
        render_help(frame, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{ClockMedia, TextTrack};
    use crate::player::chapters::default_chapters;
    use crate::player::sync::PlayerContext;
    use crate::store::MemoryStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn sync() -> PlaybackSync<ClockMedia, MemoryStore> {
        let media = ClockMedia::new(9000.0).with_text_track(TextTrack::new("English", "en"));
        let ctx = PlayerContext::new(media, MemoryStore::new(), None);
        PlaybackSync::new(ctx, "key", default_chapters())
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn draw_renders_widgets_and_records_hit_areas() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let sync = sync();
        let mut ui = UiState::new(sync.chapters().len());
        let settings = PlaybackConfig::default();

        terminal
            .draw(|f| draw(f, &sync, &mut ui, "Feature", &settings, &Theme::default()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Feature"));
        assert!(text.contains("--:--:--"));
        assert!(text.contains("[ Play ]"));
        assert!(text.contains("Intermission"));

        assert!(ui.hit.seek.is_some());
        assert!(ui.hit.volume.is_some());
        assert!(ui
            .hit
            .controls
            .iter()
            .any(|(c, _)| *c == Control::Chapter(0)));
        assert!(ui
            .hit
            .controls
            .iter()
            .all(|(c, _)| *c != Control::Fullscreen));
    }

    #[test]
    fn draw_shows_help_overlay() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let sync = sync();
        let mut ui = UiState::new(sync.chapters().len());
        ui.show_help = true;
        let settings = PlaybackConfig::default();

        terminal
            .draw(|f| draw(f, &sync, &mut ui, "Feature", &settings, &Theme::default()))
            .unwrap();

        assert!(buffer_text(&terminal).contains("vidctl help"));
    }
}
