//! Seek bar rendering for the player.
//!
//! Displays the seek slider with current/total time labels and chapter
//! indicators.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::player::chapters::Chapter;
use crate::player::sync::{ControlView, SLIDER_RANGE};
use crate::theme::Theme;

/// Width of a time label including padding.
const LABEL_WIDTH: u16 = 10;

/// Build the seek bar character array.
///
/// Creates a visual representation of the seek slider including the
/// playhead position and chapter indicators. Chapters are only placed once
/// the duration is known.
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where bar_chars contains the visual
/// representation and filled_count is the number of filled positions.
pub fn build_seek_bar_chars(
    bar_width: usize,
    seek: u16,
    duration: f64,
    chapters: &[Chapter],
) -> (Vec<char>, usize) {
    let progress = f64::from(seek.min(SLIDER_RANGE)) / f64::from(SLIDER_RANGE);
    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    if duration.is_finite() && duration > 0.0 {
        for chapter in chapters {
            let pos = ((chapter.time / duration) * bar_width as f64) as usize;
            if pos < bar_width && bar[pos] != '⏺' {
                bar[pos] = '◆';
            }
        }
    }

    (bar, filled)
}

/// Render the seek bar with time labels.
///
/// Returns the area of the bar track for click handling.
pub fn render_seek_bar(
    frame: &mut Frame,
    area: Rect,
    view: &ControlView,
    duration: f64,
    chapters: &[Chapter],
    focused: bool,
    theme: &Theme,
) -> Rect {
    let [left, track, right] = Layout::horizontal([
        Constraint::Length(LABEL_WIDTH),
        Constraint::Min(1),
        Constraint::Length(LABEL_WIDTH),
    ])
    .areas(area);

    let (bar, filled) =
        build_seek_bar_chars(track.width as usize, view.seek, duration, chapters);

    let played = theme.accent_style();
    let remaining = theme.text_secondary_style();
    let mut spans = Vec::with_capacity(bar.len());
    for (i, &c) in bar.iter().enumerate() {
        let span = if c == '◆' {
            Span::styled(c.to_string(), theme.marker_style())
        } else if i < filled {
            Span::styled("━", played)
        } else if i == filled {
            Span::styled(c.to_string(), theme.text_style())
        } else {
            Span::styled(c.to_string(), remaining)
        };
        spans.push(span);
    }

    let mut track_line = Line::from(spans);
    if focused {
        track_line = track_line.patch_style(theme.focus_style());
    }

    frame.render_widget(
        Paragraph::new(format!(" {} ", view.current_time)).style(theme.text_style()),
        left,
    );
    frame.render_widget(Paragraph::new(track_line), track);
    frame.render_widget(
        Paragraph::new(format!(" {}", view.duration)).style(theme.text_style()),
        right,
    );

    track
}
