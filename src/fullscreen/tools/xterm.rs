//! xterm window-ops fullscreen tool.

use crate::fullscreen::tool::{FullscreenMethod, FullscreenTool, FullscreenToolError};
use std::io::{self, IsTerminal, Write};

/// Terminal prefixes known to honour `CSI 10 ; Ps t`.
const SUPPORTED_TERMS: &[&str] = &["xterm", "foot", "wezterm", "contour"];

/// Fullscreen through the xterm window manipulation sequence.
///
/// `CSI 10 ; 1 t` enters fullscreen and `CSI 10 ; 0 t` leaves it.
/// Only offered when stdout is a terminal whose `TERM` is known to
/// understand the sequence.
pub struct XtermWindowOps {
    term: Option<String>,
}

impl XtermWindowOps {
    /// Create a tool reading `TERM` from the environment.
    pub fn new() -> Self {
        Self {
            term: std::env::var("TERM").ok(),
        }
    }

    /// Create a tool for a given `TERM` value.
    pub fn with_term(term: Option<&str>) -> Self {
        Self {
            term: term.map(str::to_string),
        }
    }

    fn term_supported(&self) -> bool {
        self.term
            .as_deref()
            .is_some_and(|t| SUPPORTED_TERMS.iter().any(|p| t.starts_with(p)))
    }

    fn write_sequence(&self, seq: &str) -> Result<(), FullscreenToolError> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", seq).map_err(|e| FullscreenToolError::Failed(e.to_string()))?;
        stdout
            .flush()
            .map_err(|e| FullscreenToolError::Failed(e.to_string()))
    }
}

impl FullscreenTool for XtermWindowOps {
    fn method(&self) -> FullscreenMethod {
        FullscreenMethod::XtermWindowOps
    }

    fn is_available(&self) -> bool {
        self.term_supported() && io::stdout().is_terminal()
    }

    fn enter(&self) -> Result<(), FullscreenToolError> {
        self.write_sequence("\x1b[10;1t")
    }

    fn leave(&self) -> Result<(), FullscreenToolError> {
        self.write_sequence("\x1b[10;0t")
    }
}

impl Default for XtermWindowOps {
    fn default() -> Self {
        Self::new()
    }
}
