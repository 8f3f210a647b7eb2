//! Unit tests for domain error types

use injbench_domain::{Error, Phase};

#[test]
fn test_configuration_error() {
    let error = Error::configuration("iterations must be positive");
    match &error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "iterations must be positive");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
    assert!(error.is_configuration());
}

#[test]
fn test_configuration_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = Error::configuration_with_source("Failed to read config", io);
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_resolution_error_display() {
    let error = Error::resolution("dill", "no builder for A");
    let display = format!("{error}");
    assert!(display.contains("dill"));
    assert!(display.contains("no builder for A"));
    assert!(!error.is_configuration());
}

#[test]
fn test_session_error_names_subject_and_phase() {
    let error = Error::session(
        "shaku",
        Phase::Measurement,
        Error::resolution("shaku", "provider failed"),
    );

    assert_eq!(error.failed_at(), Some(("shaku", Phase::Measurement)));
    let display = format!("{error}");
    assert!(display.contains("'shaku'"));
    assert!(display.contains("measurement"));
    assert!(display.contains("provider failed"));
}

#[test]
fn test_session_error_keeps_configuration_classification() {
    let error = Error::session("dill", Phase::Warmup, Error::configuration("bad wiring"));
    assert!(error.is_configuration());
    assert_eq!(error.failed_at(), Some(("dill", Phase::Warmup)));
}

#[test]
fn test_io_error_from_std() {
    let io = std::io::Error::other("broken pipe");
    let error: Error = io.into();
    assert!(matches!(error, Error::IoSimple { .. }));
    assert!(error.failed_at().is_none());
}
