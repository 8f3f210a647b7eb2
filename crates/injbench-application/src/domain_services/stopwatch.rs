//! Block timing
//!
//! The stopwatch reads its [`Clock`] immediately before and after the block
//! and nothing else happens in between, so logging and reporting of one
//! measurement never leak into the next.

use injbench_domain::ports::Clock;
use std::time::Duration;
use tracing::trace;

/// Elapsed time of one measured block together with the block's output
#[derive(Debug)]
pub struct Measurement<T> {
    /// Time between the clock readings around the block
    pub elapsed: Duration,
    /// Whatever the block returned
    pub output: T,
}

/// Times blocks of work against a monotonic clock
pub struct Stopwatch<C: Clock> {
    clock: C,
}

impl<C: Clock> Stopwatch<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Run `block` exactly once and measure it
    ///
    /// Elapsed time saturates at zero should a clock ever report a reading
    /// earlier than the previous one.
    pub fn measure<T>(&self, label: &str, block: impl FnOnce() -> T) -> Measurement<T> {
        let start = self.clock.now();
        let output = block();
        let end = self.clock.now();

        let elapsed = end.saturating_sub(start);
        trace!(label, ?elapsed, "Measured block");
        Measurement { elapsed, output }
    }
}
