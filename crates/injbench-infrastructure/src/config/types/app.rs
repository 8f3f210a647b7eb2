//! Main application configuration

use super::{BenchmarkConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Benchmark protocol settings
    #[serde(default)]
    pub benchmark: BenchmarkConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}
