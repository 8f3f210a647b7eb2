//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values, merged with Figment.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use injbench_application::BenchmarkPlan;
use injbench_domain::error::{Error, Result};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `INJBENCH__BENCHMARK__ITERATIONS`)
    ///
    /// An explicit configuration path that does not exist is an error; a
    /// missing default file is not.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = self.resolve_config_path()? {
            figment = figment.merge(Toml::file(config_path));
        }

        figment = figment.merge(
            Env::prefixed(&format!("{CONFIG_ENV_PREFIX}{CONFIG_ENV_SEPARATOR}"))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Path of the TOML file `load` merges, if any
    ///
    /// The explicit path when one was set, otherwise the first default
    /// location that exists.
    pub fn resolve_config_path(&self) -> Result<Option<PathBuf>> {
        match &self.config_path {
            Some(path) if !path.exists() => Err(Error::configuration(format!(
                "Configuration file not found: {}",
                path.display()
            ))),
            Some(path) => Ok(Some(path.clone())),
            None => Ok(Self::find_default_config_path()),
        }
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.is_file())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Runs after every layer has been merged, and again after command-line
/// overrides have been applied on top.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_benchmark_config(config)?;
    validate_logging_config(config)?;
    Ok(())
}

fn validate_benchmark_config(config: &AppConfig) -> Result<()> {
    BenchmarkPlan::new(config.benchmark.warmup, config.benchmark.iterations)?;

    if config.benchmark.subjects.is_empty() {
        return Err(Error::configuration(
            "At least one subject must be configured",
        ));
    }
    let mut seen = HashSet::new();
    for subject in &config.benchmark.subjects {
        if subject.trim().is_empty() {
            return Err(Error::configuration("Subject names cannot be empty"));
        }
        if !seen.insert(subject.as_str()) {
            return Err(Error::configuration(format!(
                "Subject '{subject}' is configured more than once"
            )));
        }
    }
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(drop)
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set the untimed warmup rounds
    pub fn with_warmup(mut self, warmup: i64) -> Self {
        self.config.benchmark.warmup = warmup;
        self
    }

    /// Set the timed repetitions per subject
    pub fn with_iterations(mut self, iterations: i64) -> Self {
        self.config.benchmark.iterations = iterations;
        self
    }

    /// Replace the subject list
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.benchmark.subjects = subjects.into_iter().map(Into::into).collect();
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
