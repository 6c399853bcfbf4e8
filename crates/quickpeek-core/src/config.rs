//! Presenter configuration types.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Permission mode applied before previewing: owner read/write, group and
/// other read.
pub const DEFAULT_MODE: u32 = 0o644;

/// Highest mode accepted (permission bits plus setuid/setgid/sticky).
const MAX_MODE: u32 = 0o7777;

/// What to do when the host has no presentation context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingContextPolicy {
    /// Drop the request silently.
    #[default]
    Ignore,
    /// Return [`crate::PreviewError::NoPresentationContext`].
    Error,
}

/// Configuration for the preview presenter.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PresenterConfig {
    /// Mode applied to the file before it is handed to the surface.
    #[builder(default = "DEFAULT_MODE")]
    #[serde(default = "default_mode")]
    pub permission_mode: u32,

    /// Attempt the permission adjustment at all.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub adjust_permissions: bool,

    /// Handling of requests made while no presentation context exists.
    #[builder(default)]
    #[serde(default)]
    pub missing_context: MissingContextPolicy,

    /// Animate the modal presentation.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub animated: bool,
}

fn default_true() -> bool {
    true
}

fn default_mode() -> u32 {
    DEFAULT_MODE
}

impl PresenterConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(mode) = self.permission_mode {
            if mode > MAX_MODE {
                return Err(format!("Permission mode {mode:o} exceeds {MAX_MODE:o}"));
            }
        }
        Ok(())
    }
}

impl PresenterConfig {
    /// Create a new presenter config builder.
    pub fn builder() -> PresenterConfigBuilder {
        PresenterConfigBuilder::default()
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Default config file location, `<config_dir>/quickpeek/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("quickpeek").join("config.toml"))
    }

    /// Check that the mode is representable as permission bits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.permission_mode > MAX_MODE {
            return Err(ConfigError::InvalidMode {
                mode: self.permission_mode,
            });
        }
        Ok(())
    }

    /// Set the missing-context policy.
    pub fn with_missing_context(mut self, policy: MissingContextPolicy) -> Self {
        self.missing_context = policy;
        self
    }

    /// Set the permission mode.
    pub fn with_permission_mode(mut self, mode: u32) -> Self {
        self.permission_mode = mode;
        self
    }

    /// Enable or disable the permission adjustment.
    pub fn with_adjust_permissions(mut self, adjust: bool) -> Self {
        self.adjust_permissions = adjust;
        self
    }
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            permission_mode: DEFAULT_MODE,
            adjust_permissions: true,
            missing_context: MissingContextPolicy::Ignore,
            animated: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = PresenterConfig::builder()
            .permission_mode(0o640u32)
            .missing_context(MissingContextPolicy::Error)
            .animated(false)
            .build()
            .unwrap();

        assert_eq!(config.permission_mode, 0o640);
        assert_eq!(config.missing_context, MissingContextPolicy::Error);
        assert!(config.adjust_permissions);
        assert!(!config.animated);
    }

    #[test]
    fn test_builder_rejects_oversized_mode() {
        let result = PresenterConfig::builder().permission_mode(0o17777u32).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_defaults_match_default() {
        let built = PresenterConfig::builder().build().unwrap();
        assert_eq!(built, PresenterConfig::default());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = PresenterConfig::from_toml_str("missing_context = \"error\"\n").unwrap();
        assert_eq!(config.missing_context, MissingContextPolicy::Error);
        assert_eq!(config.permission_mode, DEFAULT_MODE);
        assert!(config.adjust_permissions);
        assert!(config.animated);
    }

    #[test]
    fn test_from_toml_rejects_invalid_mode() {
        let err = PresenterConfig::from_toml_str("permission_mode = 65535\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMode { mode: 65535 }));
    }

    #[test]
    fn test_from_toml_rejects_unknown_policy() {
        let err = PresenterConfig::from_toml_str("missing_context = \"panic\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = PresenterConfig::default()
            .with_permission_mode(0o600)
            .with_missing_context(MissingContextPolicy::Error);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(PresenterConfig::from_toml_str(&text).unwrap(), config);
    }
}
