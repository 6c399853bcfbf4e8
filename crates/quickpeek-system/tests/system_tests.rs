use std::fs;

use quickpeek_core::{PreviewPresenter, PreviewSession};
use quickpeek_system::{AttachMode, SystemHost, SystemSurface, Viewer};

#[cfg(unix)]
#[test]
fn test_viewer_relaunched_on_every_request() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.pdf");
    let second = dir.path().join("b.pdf");
    fs::write(&first, b"a").unwrap();
    fs::write(&second, b"b").unwrap();

    let mut presenter = PreviewPresenter::new(
        PreviewSession::new(),
        SystemSurface::new(Viewer::Command("true".to_string())),
        SystemHost::new(AttachMode::Always),
    );

    presenter.present(&first).unwrap();
    presenter.present(&first).unwrap();
    presenter.present(&second).unwrap();

    assert_eq!(presenter.surface().launches(), 3);
    assert_eq!(presenter.surface().failures(), 0);
    assert_eq!(presenter.surface().loaded().unwrap().path(), second.as_path());
}

#[test]
fn test_launch_failure_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.pdf");
    fs::write(&path, b"a").unwrap();

    let mut presenter = PreviewPresenter::new(
        PreviewSession::new(),
        SystemSurface::new(Viewer::Command("quickpeek-no-such-viewer".to_string())),
        SystemHost::new(AttachMode::Always),
    );

    let outcome = presenter.present(&path).unwrap();

    assert!(outcome.is_presented());
    assert_eq!(presenter.surface().failures(), 1);
    assert!(presenter.surface().loaded().is_none());
    assert_eq!(presenter.target_path(), Some(path.as_path()));
}
