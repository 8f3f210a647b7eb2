//! Reporter port

use crate::error::Result;
use crate::value_objects::SubjectResult;

/// Receives the output of a benchmark session
///
/// The runner calls `explain` once before any subject runs and `report`
/// after each subject's timed block has closed, so formatting never falls
/// inside a measured interval.
pub trait BenchmarkReporter {
    /// Announce the iteration count and the subjects being compared
    fn explain(&mut self, iterations: u32, labels: &[&str]) -> Result<()>;

    /// Emit the result of one subject
    fn report(&mut self, result: &SubjectResult) -> Result<()>;
}
