//! Status line, control row and footer rendering for the player.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::player::format::{fmt_rate, fmt_volume};
use crate::player::state::{Control, PlaybackState};
use crate::theme::Theme;

/// Cells used by the volume bar.
pub const VOLUME_BAR_WIDTH: u16 = 10;

/// Spans of the control row plus the screen areas of each control.
#[derive(Debug, Default)]
pub struct ControlRow {
    pub spans: Vec<Span<'static>>,
    pub areas: Vec<(Control, Rect)>,
    /// Volume bar track, relative to the row start
    pub volume: Option<Rect>,
    width: u16,
}

impl ControlRow {
    fn push_plain(&mut self, text: &str, theme: &Theme) {
        self.width += text.len() as u16;
        self.spans
            .push(Span::styled(text.to_string(), theme.text_secondary_style()));
    }

    fn push_control(
        &mut self,
        control: Control,
        text: String,
        focus: Option<Control>,
        theme: &Theme,
    ) {
        let width = text.len() as u16;
        let mut style = theme.text_style();
        if focus == Some(control) {
            style = style.patch(theme.focus_style());
        }
        self.areas.push((control, Rect::new(self.width, 0, width, 1)));
        self.width += width;
        self.spans.push(Span::styled(text, style));
    }

    /// Move all recorded areas to the row's screen position.
    fn place(mut self, origin: Rect) -> Self {
        let shift = |r: Rect| Rect::new(origin.x + r.x, origin.y, r.width, r.height);
        self.areas = self
            .areas
            .into_iter()
            .filter(|(_, r)| r.x + r.width <= origin.width)
            .map(|(c, r)| (c, shift(r)))
            .collect();
        self.volume = self
            .volume
            .filter(|r| r.x + r.width <= origin.width)
            .map(shift);
        self
    }
}

/// Build the control row.
///
/// All labels are ASCII so span widths equal byte lengths. Areas are
/// relative to the start of the row.
pub fn build_control_row(
    state: &PlaybackState,
    has_captions: bool,
    has_fullscreen: bool,
    back_skip: f64,
    forward_skip: f64,
    focus: Option<Control>,
    theme: &Theme,
) -> ControlRow {
    let mut row = ControlRow::default();

    let play = if state.paused { "[ Play ]" } else { "[ Pause ]" };
    row.push_control(Control::PlayPause, play.to_string(), focus, theme);
    row.push_plain(" ", theme);
    row.push_control(Control::Back, format!("[ -{}s ]", back_skip), focus, theme);
    row.push_plain(" ", theme);
    row.push_control(Control::Forward, format!("[ +{}s ]", forward_skip), focus, theme);
    row.push_plain("  Vol ", theme);

    let filled = (state.volume.clamp(0.0, 1.0) * f64::from(VOLUME_BAR_WIDTH)).round() as usize;
    let bar: String = (0..VOLUME_BAR_WIDTH as usize)
        .map(|i| if i < filled { '#' } else { '.' })
        .collect();
    row.volume = Some(Rect::new(row.width, 0, VOLUME_BAR_WIDTH, 1));
    row.push_control(Control::Volume, bar, focus, theme);
    row.push_plain(&format!(" {:>4}", fmt_volume(state.volume)), theme);

    row.push_plain("  Rate ", theme);
    row.push_control(Control::Rate, format!("[{}]", fmt_rate(state.rate)), focus, theme);
    row.push_plain("  ", theme);

    if has_captions {
        let cc = if state.captions_visible {
            "[ CC: On ]"
        } else {
            "[ CC: Off ]"
        };
        row.push_control(Control::Captions, cc.to_string(), focus, theme);
        row.push_plain(" ", theme);
    }
    if has_fullscreen {
        let fs = if state.fullscreen {
            "[ Windowed ]"
        } else {
            "[ Fullscreen ]"
        };
        row.push_control(Control::Fullscreen, fs.to_string(), focus, theme);
    }

    row
}

/// Render the control row and return it placed at `area`.
#[allow(clippy::too_many_arguments)]
pub fn render_control_row(
    frame: &mut Frame,
    area: Rect,
    state: &PlaybackState,
    has_captions: bool,
    has_fullscreen: bool,
    back_skip: f64,
    forward_skip: f64,
    focus: Option<Control>,
    theme: &Theme,
) -> ControlRow {
    let row = build_control_row(
        state,
        has_captions,
        has_fullscreen,
        back_skip,
        forward_skip,
        focus,
        theme,
    );
    frame.render_widget(Paragraph::new(Line::from(row.spans.clone())), area);
    row.place(area)
}

/// Render the one-line status message with a play state icon.
pub fn render_status_line(
    frame: &mut Frame,
    area: Rect,
    status: &str,
    paused: bool,
    theme: &Theme,
) {
    let icon = if paused { "⏸ " } else { "▶ " };
    let line = Line::from(vec![
        Span::styled(icon, theme.accent_style()),
        Span::styled(status.to_string(), theme.text_style()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render a centered footer with keybinding hints.
///
/// Takes pairs of (key, description) and joins them with " | " separators.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let footer = Paragraph::new(Line::from(build_footer_spans(keys, theme)))
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
pub fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ".to_string(), theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}
