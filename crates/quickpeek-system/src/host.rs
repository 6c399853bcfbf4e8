//! Presentation host for desktop sessions.

use quickpeek_core::{PresentationContext, PresentationHost};

/// When the host reports a presentation context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AttachMode {
    /// Only when a display is available.
    #[default]
    Auto,
    /// Always, e.g. when the viewer does not need a display.
    Always,
}

/// Presents by displaying the surface directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemContext;

impl PresentationContext for SystemContext {}

/// Host backed by the current desktop session.
#[derive(Debug, Clone, Default)]
pub struct SystemHost {
    mode: AttachMode,
    context: SystemContext,
}

impl SystemHost {
    /// Create a host with the given attach mode.
    pub fn new(mode: AttachMode) -> Self {
        Self {
            mode,
            context: SystemContext,
        }
    }

    /// Attach mode in use.
    pub fn mode(&self) -> AttachMode {
        self.mode
    }

    /// Whether a presentation context is currently available.
    pub fn is_attached(&self) -> bool {
        match self.mode {
            AttachMode::Always => true,
            AttachMode::Auto => display_available(),
        }
    }
}

impl PresentationHost for SystemHost {
    fn top_context(&mut self) -> Option<&mut dyn PresentationContext> {
        if self.is_attached() {
            Some(&mut self.context)
        } else {
            None
        }
    }
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
fn display_available() -> bool {
    true
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn display_available() -> bool {
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|value| !value.is_empty()))
}
