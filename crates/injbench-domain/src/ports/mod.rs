//! Domain Port Interfaces
//!
//! Boundary contracts between the benchmark protocol and the layers that
//! plug into it:
//!
//! - **subject** - DI mechanisms under test (implemented in `injbench-subjects`)
//! - **clock** - monotonic time source (implemented in `injbench-infrastructure`)
//! - **reporter** - result output (implemented in `injbench-infrastructure`)

/// Monotonic time source
pub mod clock;
/// Result output
pub mod reporter;
/// Benchmarked DI mechanisms
pub mod subject;

pub use clock::Clock;
pub use reporter::BenchmarkReporter;
pub use subject::{Subject, SubjectAdapter};
