//! Console reporter
//!
//! Writes the session announcement and one `<label>: <ms> ms` line per
//! subject. Every line is flushed as soon as it is written so results show
//! up while later subjects are still being measured.

use crate::constants::REPORT_EXPLANATION_PREFIX;
use crate::error_ext::ErrorContext;
use injbench_domain::error::Result;
use injbench_domain::ports::BenchmarkReporter;
use injbench_domain::value_objects::SubjectResult;
use std::io::Write;

/// Line-oriented reporter over any writer
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}").io_context("Failed to write report")?;
        self.out.flush().io_context("Failed to flush report")
    }
}

/// Format the announcement printed before a session
pub fn explanation_line(iterations: u32, labels: &[&str]) -> String {
    format!(
        "{REPORT_EXPLANATION_PREFIX} {iterations} times. Comparison includes: [{}]",
        labels.join(", ")
    )
}

impl<W: Write> BenchmarkReporter for ConsoleReporter<W> {
    fn explain(&mut self, iterations: u32, labels: &[&str]) -> Result<()> {
        self.write_line(&explanation_line(iterations, labels))
    }

    fn report(&mut self, result: &SubjectResult) -> Result<()> {
        self.write_line(&result.to_string())
    }
}
