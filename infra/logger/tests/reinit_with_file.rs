use annc_logger::{LevelFilter, Logger, LoggerError};
use tempfile::tempdir;

#[test]
fn second_file_logger_is_rejected_and_first_keeps_its_writer() {
    let tmp = tempdir().expect("temp dir");

    let first = Logger::builder()
        .name("annc-first")
        .console(false)
        .path(tmp.path().join("first"))
        .init()
        .expect("first init should succeed");
    assert!(first.guard().is_some());

    let err = Logger::builder()
        .name("annc-second")
        .level(LevelFilter::DEBUG)
        .path(tmp.path().join("second"))
        .max_files(2)
        .init()
        .expect_err("a subscriber is already installed");

    assert!(
        matches!(err, LoggerError::Subscriber { .. }),
        "expected subscriber error, got {err:?}"
    );
    assert!(first.guard().is_some(), "the installed logger is untouched");
}
