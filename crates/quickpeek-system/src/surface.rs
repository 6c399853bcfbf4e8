//! Preview surface backed by an external viewer process.

use quickpeek_core::{PreviewDataSource, PreviewItem, PreviewSurface};

use crate::viewer::Viewer;

/// Launches a [`Viewer`] for the data source's single item.
///
/// The loaded item is cached until [`reload_data`](PreviewSurface::reload_data)
/// so repeated displays without a reload do not spawn duplicate viewers.
#[derive(Debug)]
pub struct SystemSurface {
    viewer: Viewer,
    loaded: Option<PreviewItem>,
    launches: usize,
    failures: usize,
}

impl SystemSurface {
    /// Create a surface using `viewer`.
    pub fn new(viewer: Viewer) -> Self {
        Self {
            viewer,
            loaded: None,
            launches: 0,
            failures: 0,
        }
    }

    /// Create a surface with the detected platform viewer.
    pub fn detect() -> Self {
        Self::new(Viewer::detect())
    }

    /// Viewer in use.
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Item last handed to the viewer.
    pub fn loaded(&self) -> Option<&PreviewItem> {
        self.loaded.as_ref()
    }

    /// Successful viewer launches.
    pub fn launches(&self) -> usize {
        self.launches
    }

    /// Failed viewer launches.
    pub fn failures(&self) -> usize {
        self.failures
    }
}

impl PreviewSurface for SystemSurface {
    fn reload_data(&mut self) {
        self.loaded = None;
    }

    fn display(&mut self, source: &dyn PreviewDataSource, _animated: bool) {
        if self.loaded.is_some() {
            return;
        }
        if source.item_count() == 0 {
            tracing::debug!("nothing to preview");
            return;
        }
        let Some(item) = source.item_at(0) else {
            return;
        };

        match self.viewer.launch(item.path()) {
            Ok(()) => {
                tracing::info!(title = %item.title(), "opened preview");
                self.launches += 1;
                self.loaded = Some(item);
            }
            Err(e) => {
                tracing::warn!("{e}");
                self.failures += 1;
            }
        }
    }
}
