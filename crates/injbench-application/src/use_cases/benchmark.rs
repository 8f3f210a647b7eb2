//! Benchmark use case
//!
//! Runs the startup comparison protocol over an ordered list of subjects:
//!
//! 1. Announce the iteration count and the subjects through the reporter.
//! 2. Warmup: `warmup` rounds over every subject in declaration order, each
//!    resolved root checked against the fixture shape. A subject is called
//!    exactly `warmup + iterations` times; wiring errors that adapters detect
//!    while building their container stay configuration errors in any phase.
//! 3. Measurement: per subject, `iterations` build + resolve units inside one
//!    continuous stopwatch block. Subjects are never interleaved while timed.
//! 4. Report each subject right after its block has closed.
//!
//! Any adapter failure aborts the whole session with the subject and phase
//! it happened in.

use crate::domain_services::Stopwatch;
use injbench_domain::constants::{DEFAULT_ITERATIONS, DEFAULT_WARMUP};
use injbench_domain::error::{Error, Result};
use injbench_domain::fixture::{GraphShape, LeafScope};
use injbench_domain::ports::{BenchmarkReporter, Clock, Subject};
use injbench_domain::value_objects::{BenchmarkReport, Phase, SubjectResult};
use std::hint::black_box;
use tracing::{debug, info};

/// Validated warmup and iteration counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkPlan {
    warmup: u32,
    iterations: u32,
}

impl BenchmarkPlan {
    /// Validate raw counts
    ///
    /// Counts are accepted as signed values so that zero and negative inputs
    /// from configuration are rejected here with a configuration error.
    pub fn new(warmup: i64, iterations: i64) -> Result<Self> {
        if iterations <= 0 {
            return Err(Error::configuration(format!(
                "Iteration count must be positive, got {iterations}"
            )));
        }
        if warmup < 0 {
            return Err(Error::configuration(format!(
                "Warmup count cannot be negative, got {warmup}"
            )));
        }
        let iterations = u32::try_from(iterations).map_err(|_| {
            Error::configuration(format!("Iteration count {iterations} exceeds {}", u32::MAX))
        })?;
        let warmup = u32::try_from(warmup).map_err(|_| {
            Error::configuration(format!("Warmup count {warmup} exceeds {}", u32::MAX))
        })?;
        Ok(Self { warmup, iterations })
    }

    pub fn warmup(&self) -> u32 {
        self.warmup
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl Default for BenchmarkPlan {
    fn default() -> Self {
        Self {
            warmup: DEFAULT_WARMUP,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Drives subjects through warmup and measurement
pub struct BenchmarkRunner<C: Clock> {
    plan: BenchmarkPlan,
    stopwatch: Stopwatch<C>,
}

impl<C: Clock> BenchmarkRunner<C> {
    pub fn new(plan: BenchmarkPlan, clock: C) -> Self {
        Self {
            plan,
            stopwatch: Stopwatch::new(clock),
        }
    }

    pub fn plan(&self) -> BenchmarkPlan {
        self.plan
    }

    /// Run a full session
    ///
    /// Results are reported and returned in the order of `subjects`.
    pub fn run(
        &self,
        subjects: &[Box<dyn Subject>],
        reporter: &mut dyn BenchmarkReporter,
    ) -> Result<BenchmarkReport> {
        if subjects.is_empty() {
            return Err(Error::configuration(
                "At least one subject is required to run a benchmark",
            ));
        }

        let labels: Vec<&str> = subjects.iter().map(|s| s.label()).collect();
        reporter.explain(self.plan.iterations, &labels)?;
        info!(
            warmup = self.plan.warmup,
            iterations = self.plan.iterations,
            subjects = ?labels,
            "Starting benchmark session"
        );

        self.warm_up(subjects)?;

        let mut results = Vec::with_capacity(subjects.len());
        for subject in subjects {
            let result = self.measure(subject.as_ref())?;
            reporter.report(&result)?;
            results.push(result);
        }

        info!("Benchmark session completed");
        Ok(BenchmarkReport {
            warmup: self.plan.warmup,
            iterations: self.plan.iterations,
            results,
        })
    }

    fn warm_up(&self, subjects: &[Box<dyn Subject>]) -> Result<()> {
        let rounds = self.plan.warmup;
        debug!(rounds, "Warming up subjects");

        for round in 0..rounds {
            for subject in subjects {
                let label = subject.label();
                let mut shape_check = Ok(None);

                let outcome = subject.run_once(&mut |root| {
                    shape_check = GraphShape::verify(root)
                        .map(|shape| Some((shape, LeafScope::of(root))));
                });
                let verified = outcome
                    .and(shape_check)
                    .map_err(|e| Error::session(label, Phase::Warmup, e))?;

                if round == 0
                    && let Some((shape, scope)) = verified
                {
                    debug!(
                        subject = label,
                        nodes = shape.node_count(),
                        leaf_scope = %scope,
                        "Subject wiring verified"
                    );
                }
            }
        }
        Ok(())
    }

    fn measure(&self, subject: &dyn Subject) -> Result<SubjectResult> {
        let label = subject.label();
        let iterations = self.plan.iterations;
        debug!(subject = label, iterations, "Measuring subject");

        let measurement = self.stopwatch.measure(label, || -> Result<()> {
            for _ in 0..iterations {
                subject.run_once(&mut |root| {
                    black_box(root);
                })?;
            }
            Ok(())
        });
        measurement
            .output
            .map_err(|e| Error::session(label, Phase::Measurement, e))?;

        let result = SubjectResult::new(label, iterations, measurement.elapsed);
        debug!(
            subject = label,
            elapsed_ms = result.elapsed_ms(),
            per_iteration = ?result.per_iteration(),
            "Subject measured"
        );
        Ok(result)
    }
}
