//! Session bootstrap
//!
//! Turns a validated [`AppConfig`] into a running benchmark: the plan is
//! built from the configured counts, subjects are resolved from the registry
//! in configured order, and results go to a [`ConsoleReporter`].
//!
//! Subjects only appear in the registry when the crate that defines them is
//! linked into the final binary.

use crate::config::AppConfig;
use crate::reporting::ConsoleReporter;
use crate::utils::{MonotonicClock, TimedOperation};
use injbench_application::ports::registry::resolve_subjects;
use injbench_application::{BenchmarkPlan, BenchmarkRunner};
use injbench_domain::error::Result;
use injbench_domain::ports::Clock;
use injbench_domain::value_objects::BenchmarkReport;
use std::io::Write;
use tracing::info;

/// Run a session with the production monotonic clock
pub fn run_benchmark<W: Write>(config: &AppConfig, out: W) -> Result<BenchmarkReport> {
    run_benchmark_with_clock(config, out, MonotonicClock::new())
}

/// Run a session against an arbitrary clock
///
/// All configuration problems (bad counts, unknown or duplicate subjects)
/// surface before the reporter writes anything.
pub fn run_benchmark_with_clock<W: Write, C: Clock>(
    config: &AppConfig,
    out: W,
    clock: C,
) -> Result<BenchmarkReport> {
    let plan = BenchmarkPlan::new(config.benchmark.warmup, config.benchmark.iterations)?;
    let subjects = resolve_subjects(&config.benchmark.subjects)?;

    let runner = BenchmarkRunner::new(plan, clock);
    let mut reporter = ConsoleReporter::new(out);

    let session = TimedOperation::start();
    let report = runner.run(&subjects, &mut reporter)?;
    info!(
        subjects = ?report.labels(),
        total_secs = session.elapsed_secs(),
        "Benchmark session finished"
    );
    Ok(report)
}
