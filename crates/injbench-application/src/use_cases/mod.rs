//! Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`BenchmarkRunner`] | Warmup, per-subject measurement and reporting |

pub mod benchmark;

pub use benchmark::{BenchmarkPlan, BenchmarkRunner};
