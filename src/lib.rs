//! vidctl - terminal movie player
//!
//! A control surface around a media element: play/pause, skips, seek,
//! volume, rate, captions, fullscreen and chapter navigation, with the
//! last position persisted across sessions.

pub mod config;
pub mod fullscreen;
pub mod logging;
pub mod media;
pub mod player;
pub mod store;
pub mod theme;

pub use config::Config;
