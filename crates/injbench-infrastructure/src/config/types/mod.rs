//! Configuration types module

pub mod app;
pub mod benchmark;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use benchmark::BenchmarkConfig;
pub use logging::LoggingConfig;
