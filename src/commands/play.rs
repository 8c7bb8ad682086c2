//! Play command handler

use anyhow::Result;

use vidctl::player::format::fmt_time;
use vidctl::player::{play_movie, PlayOptions, PlaybackResult};
use vidctl::theme::current_theme;
use vidctl::Config;

/// Start the terminal player.
pub fn handle(
    duration: Option<f64>,
    title: Option<String>,
    no_captions: bool,
    no_resume: bool,
) -> Result<()> {
    let config = Config::load()?;
    let duration = duration.unwrap_or(config.playback.default_duration);
    if !duration.is_finite() || duration <= 0.0 {
        anyhow::bail!("Duration must be a positive number of seconds");
    }

    let options = PlayOptions {
        duration,
        title: title.unwrap_or_else(|| "vidctl".to_string()),
        captions: !no_captions,
        resume: !no_resume,
    };

    let theme = current_theme();
    match play_movie(&options, &config)? {
        PlaybackResult::Ended => println!("{}", theme.primary_text("Playback finished.")),
        PlaybackResult::Stopped(position) => println!(
            "{}",
            theme.primary_text(&format!("Stopped at {}", fmt_time(position)))
        ),
    }
    Ok(())
}
