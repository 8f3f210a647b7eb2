//! Command line interface
//!
//! Flags override the loaded configuration; anything not given on the
//! command line comes from `injbench.toml` or `INJBENCH__` variables.

use clap::Parser;
use injbench_application::ports::registry::list_subjects;
use injbench_domain::error::Result;
use injbench_infrastructure::config::loader::validate_app_config;
use injbench_infrastructure::config::{AppConfig, ConfigLoader};
use injbench_infrastructure::error_ext::ErrorContext;
use std::io::Write;
use std::path::PathBuf;

/// Command line interface for injbench
#[derive(Parser, Debug, Default)]
#[command(name = "injbench")]
#[command(about = "Startup micro-benchmark for dependency injection containers")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Untimed warmup rounds per subject
    #[arg(short, long, allow_negative_numbers = true)]
    pub warmup: Option<i64>,

    /// Timed build + resolve repetitions per subject
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub iterations: Option<i64>,

    /// Subject to benchmark, in reporting order (repeatable)
    #[arg(short, long = "subject", value_name = "NAME")]
    pub subjects: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// List registered subjects and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Load configuration and apply command line overrides
    ///
    /// Also returns the configuration file that was merged, so the caller
    /// can log it once logging is up.
    pub fn load_config(&self) -> Result<(AppConfig, Option<PathBuf>)> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_config_path(path);
        }
        let source = loader.resolve_config_path()?;
        let mut config = loader.load()?;
        self.apply_overrides(&mut config);
        validate_app_config(&config)?;
        Ok((config, source))
    }

    /// Overwrite configuration values given on the command line
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(warmup) = self.warmup {
            config.benchmark.warmup = warmup;
        }
        if let Some(iterations) = self.iterations {
            config.benchmark.iterations = iterations;
        }
        if !self.subjects.is_empty() {
            config.benchmark.subjects.clone_from(&self.subjects);
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
    }
}

/// Print every registered subject with its description
pub fn print_subjects<W: Write>(mut out: W) -> Result<()> {
    for (name, description) in list_subjects() {
        writeln!(out, "{name:<10} {description}").io_context("Failed to write subject list")?;
    }
    Ok(())
}
