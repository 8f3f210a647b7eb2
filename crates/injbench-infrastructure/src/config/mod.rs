//! Configuration management
//!
//! Layered configuration loaded with Figment: built-in defaults, then an
//! optional TOML file, then `INJBENCH__` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, BenchmarkConfig, LoggingConfig};
