//! FullscreenTool trait and related types.

/// A concrete way of putting the player window into fullscreen.
///
/// Each implementation wraps one mechanism (terminal escape sequence,
/// window manager tool, ...). Several may exist on a system; one is
/// chosen once at start-up.
pub trait FullscreenTool {
    /// The method identifier for this tool.
    fn method(&self) -> FullscreenMethod;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Check if this tool can work in the current environment.
    fn is_available(&self) -> bool;

    /// Make the player window fullscreen.
    fn enter(&self) -> Result<(), FullscreenToolError>;

    /// Restore the player window from fullscreen.
    fn leave(&self) -> Result<(), FullscreenToolError>;
}

/// Which mechanism is used for fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenMethod {
    /// xterm window manipulation escape sequence
    XtermWindowOps,
    /// EWMH window manager control
    Wmctrl,
}

impl FullscreenMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::XtermWindowOps => "xterm-window-ops",
            Self::Wmctrl => "wmctrl",
        }
    }
}

/// Error from a fullscreen tool operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullscreenToolError {
    /// Tool execution failed
    Failed(String),
    /// Tool not found on system
    NotFound,
}
