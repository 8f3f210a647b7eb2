//! Benchmark report value objects

use std::fmt;
use std::time::Duration;

/// Protocol phase of a benchmark session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Untimed repetitions that bring each subject to steady state
    Warmup,
    /// The continuous timed block of a single subject
    Measurement,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warmup => write!(f, "warmup"),
            Self::Measurement => write!(f, "measurement"),
        }
    }
}

/// Total elapsed time of one subject's measurement block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectResult {
    /// Subject label
    pub label: String,
    /// Build + resolve repetitions inside the block
    pub iterations: u32,
    /// Wall-clock time of the whole block
    pub elapsed: Duration,
}

impl SubjectResult {
    /// Create a result for a subject
    pub fn new(label: impl Into<String>, iterations: u32, elapsed: Duration) -> Self {
        Self {
            label: label.into(),
            iterations,
            elapsed,
        }
    }

    /// Elapsed time in whole milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Mean time of a single build + resolve unit
    pub fn per_iteration(&self) -> Duration {
        if self.iterations == 0 {
            return Duration::ZERO;
        }
        self.elapsed / self.iterations
    }
}

impl fmt::Display for SubjectResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ms", self.label, self.elapsed_ms())
    }
}

/// Outcome of a completed benchmark session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkReport {
    /// Warmup repetitions that preceded measurement
    pub warmup: u32,
    /// Timed repetitions per subject
    pub iterations: u32,
    /// One result per subject, in declaration order
    pub results: Vec<SubjectResult>,
}

impl BenchmarkReport {
    /// Labels in reporting order
    pub fn labels(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.label.as_str()).collect()
    }
}
