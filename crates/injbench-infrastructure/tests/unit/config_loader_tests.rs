//! Configuration Loader Tests
//!
//! Loader tests read `INJBENCH__` environment variables, so they are
//! serialized with the tests that set them.

use injbench_domain::constants::{DEFAULT_ITERATIONS, DEFAULT_SUBJECTS, DEFAULT_WARMUP};
use injbench_infrastructure::config::loader::{ConfigBuilder, ConfigLoader, validate_app_config};
use injbench_infrastructure::config::{AppConfig, LoggingConfig};
use injbench_infrastructure::constants::DEFAULT_LOG_LEVEL;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("injbench.toml");
    fs::write(&path, contents).expect("write config file");
    path
}

#[test]
fn test_app_config_default() {
    let config = AppConfig::default();

    assert_eq!(config.benchmark.warmup, i64::from(DEFAULT_WARMUP));
    assert_eq!(config.benchmark.iterations, i64::from(DEFAULT_ITERATIONS));
    assert_eq!(config.benchmark.subjects, DEFAULT_SUBJECTS.to_vec());
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(!config.logging.json_format);
    validate_app_config(&config).expect("defaults are valid");
}

#[test]
#[serial]
fn test_load_full_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[benchmark]
warmup = 3
iterations = 50
subjects = ["manual", "dill"]

[logging]
level = "debug"
json_format = true
"#,
    );

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(config.benchmark.warmup, 3);
    assert_eq!(config.benchmark.iterations, 50);
    assert_eq!(config.benchmark.subjects, vec!["manual", "dill"]);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
}

#[test]
#[serial]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[benchmark]\niterations = 10\n");

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(config.benchmark.iterations, 10);
    assert_eq!(config.benchmark.warmup, i64::from(DEFAULT_WARMUP));
    assert_eq!(config.benchmark.subjects, DEFAULT_SUBJECTS.to_vec());
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
#[serial]
fn test_zero_iterations_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[benchmark]\niterations = 0\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect_err("zero iterations");
    assert!(err.is_configuration());
}

#[test]
#[serial]
fn test_negative_warmup_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[benchmark]\nwarmup = -1\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect_err("negative warmup");
    assert!(err.is_configuration());
}

#[test]
#[serial]
fn test_duplicate_and_empty_subjects_rejected() {
    let dir = TempDir::new().unwrap();
    let duplicate = write_config(&dir, "[benchmark]\nsubjects = [\"dill\", \"dill\"]\n");
    let err = ConfigLoader::new()
        .with_config_path(&duplicate)
        .load()
        .expect_err("duplicate subject");
    assert!(err.to_string().contains("dill"));

    let empty = write_config(&dir, "[benchmark]\nsubjects = []\n");
    let err = ConfigLoader::new()
        .with_config_path(&empty)
        .load()
        .expect_err("empty subjects");
    assert!(err.is_configuration());
}

#[test]
#[serial]
fn test_invalid_log_level_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging]\nlevel = \"loud\"\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect_err("invalid level");
    assert!(err.is_configuration());
}

#[test]
#[serial]
fn test_missing_explicit_file_is_error() {
    let dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new().with_config_path(dir.path().join("absent.toml"));

    let err = loader.load().expect_err("missing file");
    assert!(err.is_configuration());
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
#[serial]
fn test_resolve_config_path_reports_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[benchmark]\niterations = 3\n");
    let loader = ConfigLoader::new().with_config_path(&path);

    assert_eq!(loader.resolve_config_path().unwrap(), Some(path));

    let missing = ConfigLoader::new().with_config_path(dir.path().join("absent.toml"));
    assert!(missing.resolve_config_path().unwrap_err().is_configuration());
}

#[test]
#[serial]
fn test_malformed_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[benchmark\niterations = ");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect_err("malformed toml");
    assert!(err.is_configuration());
}

#[test]
fn test_config_builder() {
    let config = ConfigBuilder::new()
        .with_warmup(1)
        .with_iterations(5)
        .with_subjects(["shaku"])
        .build();

    assert_eq!(config.benchmark.warmup, 1);
    assert_eq!(config.benchmark.iterations, 5);
    assert_eq!(config.benchmark.subjects, vec!["shaku"]);
    validate_app_config(&config).expect("valid");
}

#[test]
#[serial]
fn test_shipped_example_config_matches_defaults() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/injbench.example.toml");

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(config, AppConfig::default());
}
