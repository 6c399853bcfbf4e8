//! Platform viewer resolution and launching.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Quick Look's command line front end on macOS.
const QUICKLOOK_BIN: &str = "qlmanage";

/// Errors that can occur while launching a viewer.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The viewer command is not on `PATH`.
    #[error("Viewer not found: {command}")]
    ViewerNotFound { command: String },

    /// The viewer command string was empty.
    #[error("Viewer command is empty")]
    EmptyCommand,

    /// Spawning the viewer failed.
    #[error("Failed to launch viewer for {path}: {source}")]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How files are handed to the platform for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    /// Quick Look panel via the given `qlmanage` binary.
    QuickLook(PathBuf),
    /// The system default application.
    System,
    /// A custom command; the file path is appended as the last argument.
    Command(String),
}

impl Viewer {
    /// Prefer Quick Look, fall back to the system opener.
    pub fn detect() -> Self {
        match which::which(QUICKLOOK_BIN) {
            Ok(bin) => Self::QuickLook(bin),
            Err(_) => Self::System,
        }
    }

    /// Launch the viewer for `path` without waiting for it to exit.
    pub fn launch(&self, path: &Path) -> Result<(), SurfaceError> {
        match self {
            Self::QuickLook(bin) => spawn(Command::new(bin).arg("-p").arg(path), path),
            Self::System => open::that_detached(path).map_err(|source| SurfaceError::Launch {
                path: path.to_path_buf(),
                source,
            }),
            Self::Command(command) => {
                let mut parts = command.split_whitespace();
                let program = parts.next().ok_or(SurfaceError::EmptyCommand)?;
                let program =
                    which::which(program).map_err(|_| SurfaceError::ViewerNotFound {
                        command: program.to_string(),
                    })?;
                spawn(Command::new(program).args(parts).arg(path), path)
            }
        }
    }
}

fn spawn(cmd: &mut Command, path: &Path) -> Result<(), SurfaceError> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(drop)
        .map_err(|source| SurfaceError::Launch {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command() {
        let err = Viewer::Command("   ".to_string())
            .launch(Path::new("/tmp/a.pdf"))
            .unwrap_err();
        assert!(matches!(err, SurfaceError::EmptyCommand));
    }

    #[test]
    fn test_unknown_command() {
        let err = Viewer::Command("quickpeek-no-such-viewer --flag".to_string())
            .launch(Path::new("/tmp/a.pdf"))
            .unwrap_err();
        assert!(
            matches!(err, SurfaceError::ViewerNotFound { ref command } if command == "quickpeek-no-such-viewer")
        );
    }
}
