//! Text formatting for time labels and control values.

/// Format seconds as `HH:MM:SS`.
///
/// Fractional seconds are truncated. Hours are not wrapped at 24, and
/// negative or non-finite input formats as zero.
pub fn fmt_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

/// Format a playback rate as shown by the rate selector, e.g. `1.25x`.
pub fn fmt_rate(rate: f64) -> String {
    let text = format!("{:.2}", rate);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{}x", text)
}

/// Format a volume in `[0, 1]` as a whole percentage.
pub fn fmt_volume(volume: f64) -> String {
    format!("{}%", (volume.clamp(0.0, 1.0) * 100.0).round() as u32)
}
