//! Chapters command handler

use anyhow::Result;

use vidctl::player::chapters::Chapter;
use vidctl::player::format::fmt_time;
use vidctl::theme::{current_theme, Theme};
use vidctl::Config;

/// Format the chapter table, one `HH:MM:SS  label` row per chapter.
pub fn format_chapters(chapters: &[Chapter], theme: &Theme) -> Vec<String> {
    chapters
        .iter()
        .map(|c| {
            format!(
                "{}  {}",
                theme.accent_text(&fmt_time(c.time)),
                theme.primary_text(&c.label)
            )
        })
        .collect()
}

/// List the configured chapters.
pub fn handle() -> Result<()> {
    let config = Config::load()?;
    for line in format_chapters(&config.chapters(), &current_theme()) {
        println!("{}", line);
    }
    Ok(())
}
