//! # injbench Domain Layer
//!
//! Core types of the DI startup benchmark: the fixture graph every subject
//! materializes, the ports the benchmark protocol is written against, and
//! the shared error type.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`fixture`] | Six-entity dependency graph and its shape checks |
//! | [`ports`] | `SubjectAdapter`, `Subject`, `Clock`, `BenchmarkReporter` |
//! | [`value_objects`] | `Phase`, `SubjectResult`, `BenchmarkReport` |
//! | [`error`] | `Error` and `Result` |
//! | [`constants`] | Protocol defaults |

pub mod constants;
pub mod error;
pub mod fixture;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use fixture::{A, B, C, D1, D2, E, Entity, GraphShape, LeafScope};
pub use value_objects::{BenchmarkReport, Phase, SubjectResult};
