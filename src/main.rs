//! vidctl binary entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use cli::{Cli, Commands, ConfigCommands, PositionCommands};
use vidctl::theme::current_theme;
use vidctl::Config;

fn main() {
    let cli = Cli::parse();

    // Logging is best-effort; the player works without a log file
    match Config::log_path() {
        Ok(path) => {
            if let Err(e) = vidctl::logging::init(&path, cli.verbose) {
                if cli.verbose {
                    eprintln!("{}", current_theme().error_text(&format!("{:#}", e)));
                }
            }
        }
        Err(e) => {
            if cli.verbose {
                eprintln!("{}", current_theme().error_text(&e.to_string()));
            }
        }
    }

    if let Err(e) = run(cli) {
        warn!(error = %e, "command failed");
        eprintln!("{}", current_theme().error_text(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Play {
            duration,
            title,
            no_captions,
            no_resume,
        } => commands::play::handle(duration, title, no_captions, no_resume),
        Commands::Chapters => commands::chapters::handle(),
        Commands::Position(cmd) => match cmd {
            PositionCommands::Show => commands::position::handle_show(),
            PositionCommands::Clear => commands::position::handle_clear(),
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}
