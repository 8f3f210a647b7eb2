//! Infrastructure utilities
//!
//! Clock and timing helpers.

mod timing;

pub use timing::{MonotonicClock, TimedOperation};
