//! Application Ports
//!
//! - **registry** - compile-time registration of benchmark subjects

pub mod registry;

pub use registry::{SUBJECTS, SubjectEntry, list_subjects, resolve_subject, resolve_subjects};
