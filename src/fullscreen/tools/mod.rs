//! Platform-specific fullscreen tools.

mod wmctrl;
mod xterm;

pub use wmctrl::Wmctrl;
pub use xterm::XtermWindowOps;

use super::tool::FullscreenTool;

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn FullscreenTool>> {
    #[cfg(target_os = "linux")]
    {
        vec![Box::new(XtermWindowOps::new()), Box::new(Wmctrl::new())]
    }

    #[cfg(not(target_os = "linux"))]
    {
        vec![Box::new(XtermWindowOps::new())]
    }
}
