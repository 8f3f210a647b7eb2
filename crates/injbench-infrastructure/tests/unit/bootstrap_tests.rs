//! Session bootstrap tests against the real subjects

use injbench_infrastructure::bootstrap::run_benchmark;
use injbench_infrastructure::config::loader::ConfigBuilder;
use injbench_infrastructure::constants::REPORT_EXPLANATION_PREFIX;

#[test]
fn test_two_subjects_end_to_end() {
    let config = ConfigBuilder::new()
        .with_warmup(1)
        .with_iterations(5)
        .with_subjects(["dill", "manual"])
        .build();
    let mut out = Vec::new();

    let report = run_benchmark(&config, &mut out).expect("session succeeds");

    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3, "unexpected output: {output}");
    assert!(lines[0].starts_with(REPORT_EXPLANATION_PREFIX));
    assert!(lines[0].contains(" 5 times"));
    for (line, label) in lines[1..].iter().zip(["dill", "manual"]) {
        let value = line
            .strip_prefix(&format!("{label}: "))
            .and_then(|rest| rest.strip_suffix(" ms"))
            .unwrap_or_else(|| panic!("malformed result line: {line}"));
        assert!(value.parse::<u128>().is_ok());
    }
    assert_eq!(report.labels(), vec!["dill", "manual"]);
}

#[test]
fn test_unknown_subject_fails_before_output() {
    let config = ConfigBuilder::new()
        .with_iterations(1)
        .with_subjects(["dill", "guice"])
        .build();
    let mut out = Vec::new();

    let err = run_benchmark(&config, &mut out).expect_err("guice is not registered");
    assert!(err.is_configuration());
    assert!(out.is_empty());
}

#[test]
fn test_non_positive_iterations_fail_before_output() {
    for iterations in [0, -3] {
        let config = ConfigBuilder::new().with_iterations(iterations).build();
        let mut out = Vec::new();

        let err = run_benchmark(&config, &mut out).expect_err("invalid iterations");
        assert!(err.is_configuration());
        assert!(out.is_empty());
    }
}
