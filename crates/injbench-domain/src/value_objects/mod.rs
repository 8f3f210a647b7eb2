//! Domain Value Objects
//!
//! Immutable values describing a benchmark session and its outcome.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Phase`] | Protocol phase a subject is executing |
//! | [`SubjectResult`] | Total elapsed time of one subject's timed block |
//! | [`BenchmarkReport`] | Ordered results of a completed session |

/// Benchmark session results
pub mod report;

pub use report::{BenchmarkReport, Phase, SubjectResult};
