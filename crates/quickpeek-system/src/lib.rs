//! Native viewer surface for quickpeek.
//!
//! Hands the current preview item to the platform's previewer: Quick Look
//! (`qlmanage -p`) where available, otherwise the system default opener.

mod host;
mod surface;
mod viewer;

pub use host::{AttachMode, SystemContext, SystemHost};
pub use surface::SystemSurface;
pub use viewer::{SurfaceError, Viewer};
