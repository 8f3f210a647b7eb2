//! Clock port

use std::time::Duration;

/// Monotonic time source used by the stopwatch
///
/// Readings are offsets from an arbitrary fixed origin and never go
/// backwards. Implementations must not be backed by the calendar clock.
pub trait Clock {
    /// Time elapsed since the clock's origin
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}
