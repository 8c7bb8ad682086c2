//! Help overlay rendering for the player.
//!
//! Displays a centered help box with all available keyboard shortcuts.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  Playback",
    "    Space        Play / Pause",
    "    Left/Right   Seek -/+5s",
    "    Up/Down      Volume +/-10%",
    "    > or .       Faster (max 2x)",
    "    < or ,       Slower (min 0.5x)",
    "",
    "  View",
    "    c            Toggle captions",
    "    f            Toggle fullscreen",
    "",
    "  Controls",
    "    Tab/S-Tab    Focus next / previous",
    "    Enter        Press focused button",
    "    Left/Right   Adjust focused slider",
    "    Esc          Leave focused control",
    "",
    "  General",
    "    ?            Show this help",
    "    q / Esc      Quit player",
    "",
    "        Press any key to close",
];

/// Width of the help box including borders.
pub const HELP_BOX_WIDTH: u16 = 44;

/// Compute the centered area for the help box.
pub fn help_area(area: Rect) -> Rect {
    let height = (HELP_LINES.len() as u16 + 2).min(area.height);
    let width = HELP_BOX_WIDTH.min(area.width);
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(middle);
    center
}

/// Render the help overlay on top of the player.
pub fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = help_area(frame.area());
    let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" vidctl help ")
        .border_style(theme.accent_style());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(block).style(theme.text_style()),
        area,
    );
}
