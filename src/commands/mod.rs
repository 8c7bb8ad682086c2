//! Subcommand handlers for the `vidctl` binary.

pub mod chapters;
pub mod completions;
pub mod config;
pub mod play;
pub mod position;
