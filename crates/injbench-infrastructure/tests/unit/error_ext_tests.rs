//! Error Extension Tests

use injbench_domain::error::{Error, Result};
use injbench_infrastructure::error_ext::ErrorContext;
use std::io;

#[test]
fn test_io_context() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context_is_configuration_error() {
    let parse_error = "x".parse::<i64>().unwrap_err();

    let err = Err::<i64, _>(parse_error)
        .config_context("bad iteration count")
        .unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("bad iteration count"));
}

#[test]
fn test_ok_passes_through() {
    let value = Ok::<_, io::Error>(42).io_context("unused").unwrap();
    assert_eq!(value, 42);
}
