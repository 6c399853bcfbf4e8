//! Core types and traits for quickpeek.
//!
//! This crate provides the preview session, the presenter that drives a
//! native preview surface, and the seams ([`PreviewSurface`],
//! [`PresentationHost`]) a platform plugs into. A headless surface is included
//! for environments without a UI.

mod config;
mod error;
pub mod headless;
mod permissions;
mod presenter;
mod session;
mod surface;

pub use config::{MissingContextPolicy, PresenterConfig, PresenterConfigBuilder, DEFAULT_MODE};
pub use error::{ConfigError, PreviewError, PreviewWarning, WarningKind};
pub use permissions::adjust_permissions;
pub use presenter::{PresentOutcome, PreviewPresenter};
pub use session::{PreviewItem, PreviewSession, SessionState};
pub use surface::{PresentationContext, PresentationHost, PreviewDataSource, PreviewSurface};
