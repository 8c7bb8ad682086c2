//! Colors for the player surface and CLI output.
//!
//! The player draws with ratatui [`Style`]s; subcommands print the same
//! colors as ANSI escapes. `NO_COLOR` switches both to [`Theme::plain`].

use ratatui::style::{Color, Modifier, Style};

/// Player palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Labels, times and most text
    pub text_primary: Color,
    /// Borders, hints and the unplayed part of the seek bar
    pub text_secondary: Color,
    /// Playhead, played range and key names
    pub accent: Color,
    /// Chapter ticks on the seek bar
    pub marker: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::screening()
    }
}

impl Theme {
    /// Gray text on the terminal background, green playhead, yellow chapters.
    pub fn screening() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            marker: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Every role left at the terminal default.
    pub fn plain() -> Self {
        Self {
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            accent: Color::Reset,
            marker: Color::Reset,
            error: Color::Reset,
            success: Color::Reset,
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Key names in the footer and help overlay.
    pub fn accent_bold_style(&self) -> Style {
        self.accent_style().add_modifier(Modifier::BOLD)
    }

    pub fn marker_style(&self) -> Style {
        Style::default().fg(self.marker)
    }

    /// Applied on top of the focused control. Works without color too.
    pub fn focus_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Times and positions in CLI output.
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// Wrap text in the color's escape code. Colors without a code stay plain.
fn paint(color: Color, text: &str) -> String {
    match ansi_code(color) {
        "" => text.to_string(),
        code => format!("{code}{text}\x1b[0m"),
    }
}

/// Foreground escape for the colors the palettes use.
fn ansi_code(color: Color) -> &'static str {
    match color {
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        _ => "",
    }
}

/// Theme for this process: [`Theme::plain`] when `NO_COLOR` is set.
pub fn current_theme() -> Theme {
    if std::env::var_os("NO_COLOR").is_some() {
        Theme::plain()
    } else {
        Theme::default()
    }
}
