//! Chapter list rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::player::chapters::{current_chapter, Chapter};
use crate::player::format::fmt_time;
use crate::player::state::Control;
use crate::theme::Theme;

/// Build one line per chapter: marker, label and start time.
///
/// The chapter containing `position` is drawn in the accent color and the
/// focused chapter is highlighted.
pub fn build_chapter_lines(
    chapters: &[Chapter],
    position: f64,
    focus: Option<Control>,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let current = current_chapter(chapters, position);
    let label_width = chapters
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0);

    chapters
        .iter()
        .enumerate()
        .map(|(i, chapter)| {
            let mut style = if current == Some(i) {
                theme.accent_bold_style()
            } else {
                theme.text_style()
            };
            if focus == Some(Control::Chapter(i)) {
                style = style.patch(theme.focus_style());
            }
            let text = format!(
                "{:<width$}  {}",
                chapter.label,
                fmt_time(chapter.time),
                width = label_width
            );
            Line::from(vec![
                Span::styled(" ◆ ", theme.marker_style()),
                Span::styled(text, style),
            ])
        })
        .collect()
}

/// Render the chapter list and return the clickable area of each entry.
pub fn render_chapters(
    frame: &mut Frame,
    area: Rect,
    chapters: &[Chapter],
    position: f64,
    focus: Option<Control>,
    theme: &Theme,
) -> Vec<(Control, Rect)> {
    let lines = build_chapter_lines(chapters, position, focus, theme);
    let visible = lines.len().min(area.height as usize);
    frame.render_widget(Paragraph::new(lines), area);

    (0..visible)
        .map(|i| {
            let row = Rect::new(area.x, area.y + i as u16, area.width, 1);
            (Control::Chapter(i), row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::chapters::default_chapters;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn lines_show_label_and_time() {
        let lines = build_chapter_lines(&default_chapters(), 0.0, None, &Theme::default());
        assert_eq!(lines.len(), 6);
        let act_one = line_text(&lines[1]);
        assert!(act_one.contains("Act I"));
        assert!(act_one.ends_with("00:15:00"));
    }

    #[test]
    fn labels_are_padded_to_same_width() {
        let lines = build_chapter_lines(&default_chapters(), 0.0, None, &Theme::default());
        let widths: Vec<usize> = lines.iter().map(|l| line_text(l).chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn current_chapter_uses_accent() {
        let theme = Theme::default();
        let lines = build_chapter_lines(&default_chapters(), 1000.0, None, &theme);
        assert_eq!(lines[1].spans[1].style.fg, Some(theme.accent));
        assert_eq!(lines[0].spans[1].style.fg, Some(theme.text_primary));
    }
}
