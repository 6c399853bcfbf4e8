//! Permission adjustment applied before a file is previewed.

use std::fs;
use std::path::Path;

use crate::error::PreviewError;

/// Set the permission bits of `path` to `mode`.
///
/// On non-Unix platforms only the owner-write bit is meaningful: the file is
/// made writable when `mode` grants owner write and read-only otherwise.
pub fn adjust_permissions(path: &Path, mode: u32) -> Result<(), PreviewError> {
    let metadata = fs::metadata(path).map_err(|e| PreviewError::permission(path, mode, e))?;
    let permissions = target_permissions(metadata.permissions(), mode);
    fs::set_permissions(path, permissions).map_err(|e| PreviewError::permission(path, mode, e))
}

#[cfg(unix)]
fn target_permissions(_current: fs::Permissions, mode: u32) -> fs::Permissions {
    use std::os::unix::fs::PermissionsExt;
    fs::Permissions::from_mode(mode)
}

#[cfg(not(unix))]
fn target_permissions(mut current: fs::Permissions, mode: u32) -> fs::Permissions {
    current.set_readonly(mode & 0o200 == 0);
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = adjust_permissions(&dir.path().join("missing.pdf"), 0o644).unwrap_err();
        assert!(matches!(err, PreviewError::PermissionAdjustmentFailed { mode: 0o644, .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_sets_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        fs::write(&path, b"%PDF-1.4").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();

        adjust_permissions(&path, 0o644).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
