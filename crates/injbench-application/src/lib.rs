//! Application Layer - injbench
//!
//! Implements the benchmark protocol on top of the domain ports.
//!
//! ## Architecture
//!
//! The application layer:
//! - Declares the subject registry that adapters register into
//! - Owns the timing primitive ([`Stopwatch`])
//! - Runs the warmup / measurement protocol ([`BenchmarkRunner`])
//! - Has no dependencies on infrastructure or on any DI library
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `injbench-domain`: fixture, ports and error types
//! - `tracing` and `linkme`

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
