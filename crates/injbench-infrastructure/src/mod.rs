//! # Infrastructure Layer
//!
//! Technical concerns around the benchmark protocol: where the plan comes
//! from, where the results go, and which clock measures them.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML + environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing, written to stderr |
//! | [`reporting`] | Console reporter for benchmark results |
//!
//! ### Runtime
//! | Module | Description |
//! |--------|-------------|
//! | [`utils`] | Monotonic clock and timing helpers |
//! | [`bootstrap`] | Assembles and runs a session from configuration |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod reporting;
pub mod utils;

// Re-export commonly used types
pub use bootstrap::run_benchmark;
pub use config::{AppConfig, BenchmarkConfig, ConfigLoader, LoggingConfig};
pub use error_ext::ErrorContext;
pub use reporting::ConsoleReporter;
pub use utils::{MonotonicClock, TimedOperation};
