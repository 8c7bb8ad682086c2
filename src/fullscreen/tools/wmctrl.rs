//! Linux wmctrl fullscreen tool.

use crate::fullscreen::tool::{FullscreenMethod, FullscreenTool, FullscreenToolError};
use std::process::{Command, Stdio};

/// Fullscreen by asking an EWMH window manager through `wmctrl`.
///
/// Acts on the active window, which is the terminal hosting the player.
pub struct Wmctrl;

impl Wmctrl {
    /// Create a new Wmctrl tool.
    pub fn new() -> Self {
        Self
    }

    /// Check if wmctrl is installed.
    fn tool_exists() -> bool {
        Command::new("which")
            .arg("wmctrl")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn set_state(action: &str) -> Result<(), FullscreenToolError> {
        let status = Command::new("wmctrl")
            .args(["-r", ":ACTIVE:", "-b", &format!("{},fullscreen", action)])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => FullscreenToolError::NotFound,
                _ => FullscreenToolError::Failed(e.to_string()),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(FullscreenToolError::Failed("wmctrl failed".to_string()))
        }
    }
}

impl FullscreenTool for Wmctrl {
    fn method(&self) -> FullscreenMethod {
        FullscreenMethod::Wmctrl
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && std::env::var_os("DISPLAY").is_some() && Self::tool_exists()
    }

    fn enter(&self) -> Result<(), FullscreenToolError> {
        Self::set_state("add")
    }

    fn leave(&self) -> Result<(), FullscreenToolError> {
        Self::set_state("remove")
    }
}

impl Default for Wmctrl {
    fn default() -> Self {
        Self::new()
    }
}
