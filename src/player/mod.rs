//! Terminal movie player
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `sync`: `PlaybackSync`, which keeps the media element, the widget
//!   values and the position store in step
//! - `state`: playback snapshot, focus and hit-test state shared by input
//!   and rendering
//! - `chapters` / `format`: chapter list and label formatting
//! - `input/`: keyboard and mouse input handling
//! - `render/`: seek bar, control row, chapter list, help overlay
//!
//! # Usage
//!
//! ```no_run
//! use vidctl::player::{play_movie, PlayOptions, PlaybackResult};
//! use vidctl::Config;
//!
//! let options = PlayOptions {
//!     duration: 9000.0,
//!     title: "Feature".to_string(),
//!     captions: true,
//!     resume: true,
//! };
//! match play_movie(&options, &Config::default()).unwrap() {
//!     PlaybackResult::Ended => println!("Finished"),
//!     PlaybackResult::Stopped(at) => println!("Stopped at {}s", at),
//! }
//! ```

pub mod chapters;
pub mod format;
pub mod input;
mod native;
pub mod render;
pub mod state;
pub mod sync;

pub use chapters::Chapter;
pub use native::{build_session, open_store, play_movie, PlayOptions, PlaybackResult};
pub use state::{InputResult, PlaybackState, UiState};
pub use sync::{ControlView, PlaybackSync, PlayerContext};
