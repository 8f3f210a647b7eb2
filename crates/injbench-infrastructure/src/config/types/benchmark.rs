//! Benchmark configuration types

use injbench_domain::constants::{DEFAULT_ITERATIONS, DEFAULT_SUBJECTS, DEFAULT_WARMUP};
use serde::{Deserialize, Serialize};

/// Benchmark protocol configuration
///
/// Counts are signed so that zero and negative values read from a file or
/// the environment reach validation instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Untimed build + resolve rounds before measurement
    pub warmup: i64,

    /// Timed build + resolve repetitions per subject
    pub iterations: i64,

    /// Subject names in reporting order
    pub subjects: Vec<String>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            warmup: i64::from(DEFAULT_WARMUP),
            iterations: i64::from(DEFAULT_ITERATIONS),
            subjects: DEFAULT_SUBJECTS.iter().map(ToString::to_string).collect(),
        }
    }
}
