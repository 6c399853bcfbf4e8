//! Presents a single file through a native preview surface.

use std::path::{Path, PathBuf};

use crate::config::{MissingContextPolicy, PresenterConfig};
use crate::error::{PreviewError, PreviewWarning};
use crate::permissions::adjust_permissions;
use crate::session::{PreviewItem, PreviewSession};
use crate::surface::{PresentationHost, PreviewDataSource, PreviewSurface};

/// Result of a preview request that was not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentOutcome {
    /// The surface was asked to show the new target.
    Presented { warnings: Vec<PreviewWarning> },
    /// No presentation context was available and the request was dropped.
    Dropped { warnings: Vec<PreviewWarning> },
}

impl PresentOutcome {
    /// Whether the surface was presented.
    pub fn is_presented(&self) -> bool {
        matches!(self, Self::Presented { .. })
    }

    /// Recovered failures encountered along the way.
    pub fn warnings(&self) -> &[PreviewWarning] {
        match self {
            Self::Presented { warnings } | Self::Dropped { warnings } => warnings,
        }
    }

    /// Take the warnings out of the outcome.
    pub fn into_warnings(self) -> Vec<PreviewWarning> {
        match self {
            Self::Presented { warnings } | Self::Dropped { warnings } => warnings,
        }
    }
}

/// Owns a preview session and drives one preview surface.
///
/// The surface is reloaded on every accepted request so switching between
/// files, or re-requesting the same file, never shows stale content.
#[derive(Debug)]
pub struct PreviewPresenter<S, H> {
    session: PreviewSession,
    surface: S,
    host: H,
    config: PresenterConfig,
}

impl<S, H> PreviewPresenter<S, H>
where
    S: PreviewSurface,
    H: PresentationHost,
{
    /// Create a presenter with the default config.
    pub fn new(session: PreviewSession, surface: S, host: H) -> Self {
        Self::with_config(session, surface, host, PresenterConfig::default())
    }

    /// Create a presenter with an explicit config.
    pub fn with_config(
        session: PreviewSession,
        surface: S,
        host: H,
        config: PresenterConfig,
    ) -> Self {
        Self {
            session,
            surface,
            host,
            config,
        }
    }

    /// Make the file at `path` the preview target and show it.
    ///
    /// Permission adjustment is best-effort: a failure is logged and returned
    /// as a warning. An empty path is rejected before anything is touched.
    pub fn present(&mut self, path: impl Into<PathBuf>) -> Result<PresentOutcome, PreviewError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(PreviewError::EmptyPath);
        }
        let path = std::path::absolute(&path).unwrap_or(path);

        let mut warnings = Vec::new();
        if self.config.adjust_permissions {
            if let Err(e) = adjust_permissions(&path, self.config.permission_mode) {
                tracing::warn!(path = %path.display(), "{e}");
                warnings.extend(PreviewWarning::from_error(&e));
            }
        }

        let Some(context) = self.host.top_context() else {
            return match self.config.missing_context {
                MissingContextPolicy::Ignore => {
                    tracing::debug!(path = %path.display(), "no presentation context, dropping preview");
                    Ok(PresentOutcome::Dropped { warnings })
                }
                MissingContextPolicy::Error => Err(PreviewError::NoPresentationContext),
            };
        };

        tracing::debug!(path = %path.display(), "setting preview target");
        self.session.set_target(path);
        self.surface.reload_data();
        context.present(&mut self.surface, &self.session, self.config.animated);

        Ok(PresentOutcome::Presented { warnings })
    }

    /// Current preview target.
    pub fn target_path(&self) -> Option<&Path> {
        self.session.target_path()
    }

    /// The session backing this presenter.
    pub fn session(&self) -> &PreviewSession {
        &self.session
    }

    /// The driven surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the driven surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The host application UI.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to attach or detach its UI.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Active config.
    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    /// Split the presenter back into its parts.
    pub fn into_parts(self) -> (PreviewSession, S, H) {
        (self.session, self.surface, self.host)
    }
}

impl<S, H> PreviewDataSource for PreviewPresenter<S, H> {
    fn item_count(&self) -> usize {
        self.session.item_count()
    }

    fn item_at(&self, index: usize) -> Option<PreviewItem> {
        self.session.item_at(index)
    }
}
