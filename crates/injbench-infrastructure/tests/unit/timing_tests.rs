//! Clock and timing tests

use injbench_application::domain_services::Stopwatch;
use injbench_domain::ports::Clock;
use injbench_infrastructure::utils::{MonotonicClock, TimedOperation};
use std::time::Duration;

#[test]
fn test_monotonic_clock_never_goes_backwards() {
    let clock = MonotonicClock::new();
    let mut previous = clock.now();
    for _ in 0..1_000 {
        let reading = clock.now();
        assert!(reading >= previous);
        previous = reading;
    }
}

#[test]
fn test_noop_block_measures_non_negative() {
    let stopwatch = Stopwatch::new(MonotonicClock::new());
    let measurement = stopwatch.measure("noop", || ());
    assert!(measurement.elapsed >= Duration::ZERO);
}

#[test]
fn test_stopwatch_sees_sleep() {
    let stopwatch = Stopwatch::new(MonotonicClock::new());
    let measurement = stopwatch.measure("sleep", || std::thread::sleep(Duration::from_millis(5)));
    assert!(measurement.elapsed >= Duration::from_millis(5));
}

#[test]
fn test_timed_operation() {
    let timer = TimedOperation::start();
    std::thread::sleep(Duration::from_millis(2));
    assert!(timer.elapsed_secs() >= 0.002);
}
