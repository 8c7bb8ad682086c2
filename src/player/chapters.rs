//! Static chapter list.
//!
//! Chapters are named timestamps used for quick navigation. The list is
//! fixed for the session: it drives seek-on-select and nothing else.

use serde::{Deserialize, Serialize};

use crate::player::sync::END_MARGIN;

/// A named timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Display label
    pub label: String,
    /// Start time in seconds
    pub time: f64,
}

impl Chapter {
    /// Create a chapter.
    pub fn new(label: impl Into<String>, time: f64) -> Self {
        Self {
            label: label.into(),
            time,
        }
    }

    /// Position to seek to when this chapter is selected.
    ///
    /// Kept just short of the end so a chapter past the media length does
    /// not land on the end of media. Before metadata loads the chapter time
    /// is used as is.
    pub fn seek_target(&self, duration: f64) -> f64 {
        if duration.is_finite() {
            self.time.min(duration - END_MARGIN).max(0.0)
        } else {
            self.time
        }
    }
}

/// Built-in chapter list.
pub fn default_chapters() -> Vec<Chapter> {
    vec![
        Chapter::new("Opening", 0.0),
        Chapter::new("Act I", 15.0 * 60.0),
        Chapter::new("Act II", 55.0 * 60.0),
        Chapter::new("Intermission", 75.0 * 60.0),
        Chapter::new("Act III", 105.0 * 60.0),
        Chapter::new("Finale", 140.0 * 60.0),
    ]
}

/// Index of the chapter containing `position`.
///
/// Expects `chapters` sorted by time. Returns `None` before the first
/// chapter starts.
pub fn current_chapter(chapters: &[Chapter], position: f64) -> Option<usize> {
    chapters.iter().rposition(|c| c.time <= position)
}
