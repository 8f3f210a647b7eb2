//! Domain layer constants
//!
//! Benchmark protocol defaults. Infrastructure-specific constants remain in
//! `injbench_infrastructure::constants`.

// ============================================================================
// BENCHMARK PROTOCOL CONSTANTS
// ============================================================================

/// Untimed repetitions per subject before measurement starts
pub const DEFAULT_WARMUP: u32 = 200;

/// Timed build + resolve repetitions per subject
pub const DEFAULT_ITERATIONS: u32 = 20_000;

/// Subjects compared when none are configured, in reporting order
pub const DEFAULT_SUBJECTS: &[&str] = &["dill", "shaku", "manual"];
