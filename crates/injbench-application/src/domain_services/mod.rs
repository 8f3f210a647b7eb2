//! Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`Stopwatch`] | Times a block of work against a [`Clock`](injbench_domain::ports::Clock) |

/// Block timing
pub mod stopwatch;

pub use stopwatch::{Measurement, Stopwatch};
