//! Error types for preview and configuration operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while presenting a preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The requested path was empty.
    #[error("Preview path is empty")]
    EmptyPath,

    /// The file's permission bits could not be changed.
    #[error("Failed to set permissions {mode:o} on {path}: {source}")]
    PermissionAdjustmentFailed {
        path: PathBuf,
        mode: u32,
        #[source]
        source: std::io::Error,
    },

    /// The host has no surface ready to host the modal preview.
    #[error("No presentation context available")]
    NoPresentationContext,
}

impl PreviewError {
    /// Create a permission adjustment error with path context.
    pub fn permission(path: impl Into<PathBuf>, mode: u32, source: std::io::Error) -> Self {
        Self::PermissionAdjustmentFailed {
            path: path.into(),
            mode,
            source,
        }
    }
}

/// Errors that can occur while loading presenter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Permission mode outside `0o7777`.
    #[error("Invalid permission mode: {mode:o}")]
    InvalidMode { mode: u32 },
}

/// Kind of preview warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Permission bits could not be adjusted.
    PermissionAdjustment,
}

/// Non-fatal warning produced while presenting a preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewWarning {
    /// Path the warning refers to.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl PreviewWarning {
    /// Create a new preview warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Build a warning from a recovered error.
    pub fn from_error(error: &PreviewError) -> Option<Self> {
        match error {
            PreviewError::PermissionAdjustmentFailed { path, .. } => Some(Self::new(
                path.clone(),
                error.to_string(),
                WarningKind::PermissionAdjustment,
            )),
            _ => None,
        }
    }
}
