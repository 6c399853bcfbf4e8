//! Preview session state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A previewable file handle returned to the preview surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreviewItem {
    path: PathBuf,
}

impl PreviewItem {
    /// Create an item for a file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the file to render.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Title shown by the surface: the file name, or the whole path when
    /// there is none.
    pub fn title(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Observable state of a [`PreviewSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState<'a> {
    /// No target has been set yet.
    Empty,
    /// A single file is the preview target.
    Active(&'a Path),
}

/// Tracks the single file currently targeted for preview.
///
/// Setting a target replaces the previous one. There is no way back to the
/// empty state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewSession {
    target_path: Option<PathBuf>,
}

impl PreviewSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current target, if any.
    pub fn target_path(&self) -> Option<&Path> {
        self.target_path.as_deref()
    }

    /// Replace the current target.
    pub fn set_target(&mut self, path: impl Into<PathBuf>) {
        self.target_path = Some(path.into());
    }

    /// Current state.
    pub fn state(&self) -> SessionState<'_> {
        match self.target_path.as_deref() {
            Some(path) => SessionState::Active(path),
            None => SessionState::Empty,
        }
    }

    /// Whether a target is set.
    pub fn is_active(&self) -> bool {
        self.target_path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = PreviewSession::new();
        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.target_path().is_none());
        assert!(!session.is_active());
    }

    #[test]
    fn test_set_target_replaces() {
        let mut session = PreviewSession::new();
        session.set_target("/tmp/a.pdf");
        session.set_target("/tmp/b.pdf");
        assert_eq!(session.state(), SessionState::Active(Path::new("/tmp/b.pdf")));
    }

    #[test]
    fn test_item_title() {
        assert_eq!(PreviewItem::new("/downloads/invoice.pdf").title(), "invoice.pdf");
        assert_eq!(PreviewItem::new("/").title(), "/");
    }
}
