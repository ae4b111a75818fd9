use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("yarhl-source-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn reads_existing_file() {
    let dir = scratch_dir("reads");
    let path = dir.join("demo.yar");
    std::fs::write(&path, "rule demo {\n}\n").unwrap();

    assert_eq!(load_source(&path).unwrap(), "rule demo {\n}\n");
    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn missing_file_is_not_found() {
    let dir = scratch_dir("missing");
    let path = dir.join("nope.yar");

    let err = load_source(&path).unwrap_err();
    assert!(matches!(err, SourceError::NotFound(_)), "{err:?}");
    assert_eq!(err.path(), path.as_path());
    assert_eq!(
        err.to_string(),
        format!("cannot find file '{}'", path.display())
    );
    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn invalid_utf8_is_reported() {
    let dir = scratch_dir("utf8");
    let path = dir.join("binary.yar");
    std::fs::write(&path, [0x72, 0x75, 0xff, 0xfe]).unwrap();

    let err = load_source(&path).unwrap_err();
    assert!(matches!(err, SourceError::InvalidUtf8(_)), "{err:?}");
    assert!(err.to_string().ends_with("contains invalid UTF-8 data"));
    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn other_io_errors_keep_their_source() {
    let err = SourceError::from_io(
        Path::new("x.yar"),
        io::Error::new(io::ErrorKind::Interrupted, "boom"),
    );
    assert!(matches!(err, SourceError::Io { .. }));
    assert_eq!(err.to_string(), "error reading 'x.yar': boom");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn permission_denied_is_classified() {
    let err = SourceError::from_io(
        Path::new("locked.yar"),
        io::Error::from(io::ErrorKind::PermissionDenied),
    );
    assert!(matches!(err, SourceError::PermissionDenied(_)));
    assert_eq!(err.to_string(), "permission denied reading 'locked.yar'");
}
