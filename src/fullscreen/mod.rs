//! Fullscreen capability
//!
//! Several mechanisms can make the player fullscreen. They are checked once,
//! in priority order, and the first available one becomes the player's
//! single [`Fullscreen`] capability. When nothing is available the player
//! simply has no capability and the fullscreen control is a no-op.

mod tool;
pub mod tools;

pub use tool::{FullscreenMethod, FullscreenTool, FullscreenToolError};

use tools::platform_tools;

/// The resolved fullscreen capability.
///
/// Tracks whether fullscreen is currently active, since none of the
/// underlying mechanisms can be queried for it.
pub struct Fullscreen {
    tool: Box<dyn FullscreenTool>,
    active: bool,
}

impl Fullscreen {
    /// Check the platform tools and keep the first available one.
    pub fn detect() -> Option<Self> {
        Self::from_tools(platform_tools())
    }

    /// Check the given tools in order and keep the first available one.
    pub fn from_tools(tools: Vec<Box<dyn FullscreenTool>>) -> Option<Self> {
        let tool = tools.into_iter().find(|t| t.is_available())?;
        tracing::debug!(tool = tool.name(), "resolved fullscreen capability");
        Some(Self {
            tool,
            active: false,
        })
    }

    /// Which mechanism was resolved.
    pub fn method(&self) -> FullscreenMethod {
        self.tool.method()
    }

    /// Whether fullscreen is currently active.
    pub fn is_fullscreen(&self) -> bool {
        self.active
    }

    /// Enter fullscreen.
    pub fn request(&mut self) -> Result<(), FullscreenToolError> {
        self.tool.enter()?;
        self.active = true;
        Ok(())
    }

    /// Leave fullscreen.
    pub fn exit(&mut self) -> Result<(), FullscreenToolError> {
        self.tool.leave()?;
        self.active = false;
        Ok(())
    }

    /// Leave fullscreen if active, enter it otherwise.
    pub fn toggle(&mut self) -> Result<(), FullscreenToolError> {
        if self.is_fullscreen() {
            self.exit()
        } else {
            self.request()
        }
    }
}

impl std::fmt::Debug for Fullscreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fullscreen")
            .field("method", &self.method())
            .field("active", &self.active)
            .finish()
    }
}
