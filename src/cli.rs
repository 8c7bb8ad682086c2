//! Command-line interface definition.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Terminal video player with resume, chapters and keyboard shortcuts.
#[derive(Debug, Parser)]
#[command(name = "vidctl", version, about, long_about = None)]
pub struct Cli {
    /// Write debug logs (overridden by VIDCTL_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a movie in the terminal player
    Play {
        /// Media length in seconds (defaults to playback.default_duration)
        #[arg(short, long)]
        duration: Option<f64>,

        /// Title shown in the player frame
        #[arg(short, long)]
        title: Option<String>,

        /// Start without a caption track
        #[arg(long)]
        no_captions: bool,

        /// Ignore and drop the saved position
        #[arg(long)]
        no_resume: bool,
    },

    /// List chapters with their start times
    Chapters,

    /// Inspect or drop the saved playback position
    #[command(subcommand)]
    Position(PositionCommands),

    /// Show or edit the configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum PositionCommands {
    /// Print the saved position
    Show,
    /// Forget the saved position
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Print the config file path
    Path,
}
