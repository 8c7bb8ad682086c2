//! Position subcommands handler

use anyhow::{Context, Result};

use vidctl::player::format::fmt_time;
use vidctl::store::{JsonFileStore, PositionStore, StoreError, StoredEntry};
use vidctl::theme::{current_theme, Theme};
use vidctl::Config;

fn open_store() -> Result<JsonFileStore> {
    let path = Config::store_path()?;
    JsonFileStore::open(&path)
        .with_context(|| format!("Failed to open position store {}", path.display()))
}

/// Describe a stored entry, e.g. `00:02:00 (saved 2026-01-01 12:00 UTC)`.
pub fn describe_entry(entry: &StoredEntry, theme: &Theme) -> String {
    let position = match entry.value.trim().parse::<f64>() {
        Ok(secs) if secs.is_finite() => fmt_time(secs),
        _ => format!("unreadable value {:?}", entry.value),
    };
    format!(
        "{} {}",
        theme.accent_text(&position),
        theme.secondary_text(&format!(
            "(saved {})",
            entry.saved_at.format("%Y-%m-%d %H:%M UTC")
        ))
    )
}

/// Print the persisted position.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let store = open_store()?;
    let theme = current_theme();

    match store.entry(&config.playback.storage_key) {
        Some(entry) => println!("{}", describe_entry(entry, &theme)),
        None => println!("{}", theme.primary_text("No saved position.")),
    }
    Ok(())
}

/// Drop the persisted position so the next session starts from the beginning.
///
/// A corrupt store file cannot hold a usable position, so it is deleted.
pub fn handle_clear() -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();
    let path = Config::store_path()?;

    let mut store = match JsonFileStore::open(&path) {
        Ok(store) => store,
        Err(StoreError::Corrupt { .. }) => {
            println!(
                "{}",
                theme.secondary_text(&format!("Removing corrupt store {}", path.display()))
            );
            JsonFileStore::reset(&path)
                .with_context(|| format!("Failed to reset position store {}", path.display()))?
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to open position store {}", path.display()))
        }
    };
    store.remove(&config.playback.storage_key)?;
    println!("{}", theme.success_text("Saved position cleared."));
    Ok(())
}
