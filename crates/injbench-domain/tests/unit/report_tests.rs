//! Report value object tests

use injbench_domain::{BenchmarkReport, Phase, SubjectResult};
use std::time::Duration;

#[test]
fn test_subject_result_display() {
    let result = SubjectResult::new("dill", 20_000, Duration::from_micros(1_234_567));
    assert_eq!(result.elapsed_ms(), 1234);
    assert_eq!(result.to_string(), "dill: 1234 ms");
}

#[test]
fn test_subject_result_per_iteration() {
    let result = SubjectResult::new("manual", 4, Duration::from_millis(8));
    assert_eq!(result.per_iteration(), Duration::from_millis(2));

    let empty = SubjectResult::new("manual", 0, Duration::from_millis(8));
    assert_eq!(empty.per_iteration(), Duration::ZERO);
}

#[test]
fn test_report_lookup_keeps_order() {
    let report = BenchmarkReport {
        warmup: 1,
        iterations: 5,
        results: vec![
            SubjectResult::new("shaku", 5, Duration::from_millis(3)),
            SubjectResult::new("dill", 5, Duration::from_millis(4)),
        ],
    };
    assert_eq!(report.labels(), vec!["shaku", "dill"]);
    assert_eq!(report.results[1].elapsed_ms(), 4);
}

#[test]
fn test_phase_display() {
    assert_eq!(Phase::Warmup.to_string(), "warmup");
    assert_eq!(Phase::Measurement.to_string(), "measurement");
}
