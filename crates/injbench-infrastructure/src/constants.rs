//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Protocol defaults are defined in `injbench_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "injbench.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "injbench";

/// Environment variable prefix for configuration
///
/// Nested keys are separated by a double underscore, e.g.
/// `INJBENCH__BENCHMARK__ITERATIONS`.
pub const CONFIG_ENV_PREFIX: &str = "INJBENCH";

/// Separator between the prefix and nested configuration keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level; keeps stderr quiet next to the report
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "INJBENCH_LOG";

// ============================================================================
// REPORTING CONSTANTS
// ============================================================================

/// Prefix of the line announcing a benchmark session
pub const REPORT_EXPLANATION_PREFIX: &str = "Starting up DI containers & instantiating a dependency graph";
