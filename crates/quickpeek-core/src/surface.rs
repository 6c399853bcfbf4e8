//! Seams between the presenter and the platform's preview UI.

use crate::session::{PreviewItem, PreviewSession};

/// Content provider queried by a preview surface.
pub trait PreviewDataSource {
    /// Number of items available: 1 when a target is set, else 0.
    fn item_count(&self) -> usize;

    /// Item at `index`. Only index 0 is valid, and only when
    /// [`item_count`](Self::item_count) is 1.
    fn item_at(&self, index: usize) -> Option<PreviewItem>;
}

impl PreviewDataSource for PreviewSession {
    fn item_count(&self) -> usize {
        usize::from(self.is_active())
    }

    fn item_at(&self, index: usize) -> Option<PreviewItem> {
        match (index, self.target_path()) {
            (0, Some(path)) => Some(PreviewItem::new(path)),
            _ => None,
        }
    }
}

/// A native preview surface able to render common document formats.
pub trait PreviewSurface {
    /// Discard any loaded content so the next display re-queries the source.
    fn reload_data(&mut self);

    /// Show the surface, pulling items from `source`.
    fn display(&mut self, source: &dyn PreviewDataSource, animated: bool);
}

/// A context able to show a surface modally over the current UI.
pub trait PresentationContext {
    /// Present `surface` without blocking the caller.
    fn present(
        &mut self,
        surface: &mut dyn PreviewSurface,
        source: &dyn PreviewDataSource,
        animated: bool,
    ) {
        surface.display(source, animated);
    }
}

/// The host application's UI.
pub trait PresentationHost {
    /// Top-level presentation context, or `None` while no UI is attached.
    fn top_context(&mut self) -> Option<&mut dyn PresentationContext>;
}
