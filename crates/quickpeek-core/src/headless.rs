//! Headless surface and host for environments without a UI.
//!
//! [`RecordingSurface`] renders nothing; it records what a real surface
//! would have shown. [`HeadlessHost`] can be detached to simulate a host
//! whose UI is not ready yet.

use serde::Serialize;

use crate::session::PreviewItem;
use crate::surface::{PresentationContext, PresentationHost, PreviewDataSource, PreviewSurface};

/// A preview surface that records reloads and displayed items.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordingSurface {
    reloads: usize,
    displayed: Vec<PreviewItem>,
    loaded: Option<PreviewItem>,
}

impl RecordingSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the surface was told to reload.
    pub fn reload_count(&self) -> usize {
        self.reloads
    }

    /// Every item shown, in order.
    pub fn displayed(&self) -> &[PreviewItem] {
        &self.displayed
    }

    /// Item currently loaded.
    pub fn loaded(&self) -> Option<&PreviewItem> {
        self.loaded.as_ref()
    }
}

impl PreviewSurface for RecordingSurface {
    fn reload_data(&mut self) {
        self.reloads += 1;
        self.loaded = None;
    }

    fn display(&mut self, source: &dyn PreviewDataSource, _animated: bool) {
        if self.loaded.is_none() && source.item_count() > 0 {
            self.loaded = source.item_at(0);
        }
        if let Some(item) = &self.loaded {
            self.displayed.push(item.clone());
        }
    }
}

/// A presentation context that counts presentations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HeadlessContext {
    presentations: usize,
    animated: usize,
}

impl HeadlessContext {
    /// Number of modal presentations requested.
    pub fn presentations(&self) -> usize {
        self.presentations
    }

    /// Number of those presentations that were animated.
    pub fn animated(&self) -> usize {
        self.animated
    }
}

impl PresentationContext for HeadlessContext {
    fn present(
        &mut self,
        surface: &mut dyn PreviewSurface,
        source: &dyn PreviewDataSource,
        animated: bool,
    ) {
        self.presentations += 1;
        if animated {
            self.animated += 1;
        }
        surface.display(source, animated);
    }
}

/// A host whose UI can be attached or detached.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessHost {
    attached: bool,
    context: HeadlessContext,
}

impl HeadlessHost {
    /// A host with its UI attached.
    pub fn attached() -> Self {
        Self {
            attached: true,
            context: HeadlessContext::default(),
        }
    }

    /// A host with no UI yet.
    pub fn detached() -> Self {
        Self {
            attached: false,
            context: HeadlessContext::default(),
        }
    }

    /// Attach or detach the UI.
    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    /// The context used for presentations.
    pub fn context(&self) -> &HeadlessContext {
        &self.context
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::attached()
    }
}

impl PresentationHost for HeadlessHost {
    fn top_context(&mut self) -> Option<&mut dyn PresentationContext> {
        if self.attached {
            Some(&mut self.context)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PreviewSession;

    #[test]
    fn test_surface_caches_until_reload() {
        let mut session = PreviewSession::new();
        session.set_target("/tmp/a.pdf");
        let mut surface = RecordingSurface::new();

        surface.display(&session, false);
        session.set_target("/tmp/b.pdf");
        surface.display(&session, false);
        assert_eq!(surface.loaded().unwrap().title(), "a.pdf");

        surface.reload_data();
        surface.display(&session, false);
        assert_eq!(surface.loaded().unwrap().title(), "b.pdf");
        assert_eq!(surface.reload_count(), 1);
        assert_eq!(surface.displayed().len(), 3);
    }

    #[test]
    fn test_detached_host_has_no_context() {
        let mut host = HeadlessHost::detached();
        assert!(host.top_context().is_none());
        host.set_attached(true);
        assert!(host.top_context().is_some());
    }
}
