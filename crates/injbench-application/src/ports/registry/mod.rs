//! Subject Registry System
//!
//! Defines the auto-registration infrastructure for benchmark subjects.
//! Uses the `linkme` crate for compile-time registration of subject
//! adapters that are discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Subject Registration Flow                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Adapter defines:   #[linkme::distributed_slice(SUBJECTS)]   │
//! │                        static ENTRY: SubjectEntry = ...         │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static SUBJECTS: [SubjectEntry]      │
//! │                              ↓                                  │
//! │  3. Config selects:    subjects = ["dill", "shaku"]             │
//! │                              ↓                                  │
//! │  4. Resolver builds:   Vec<Box<dyn Subject>> in config order    │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The registry only holds adapter factories. Fixture bindings live in the
//! containers each adapter builds, never here.

pub mod subjects;

pub use subjects::{SUBJECTS, SubjectEntry, list_subjects, resolve_subject, resolve_subjects};
