//! # injbench - Benchmark Subjects
//!
//! One adapter per DI mechanism under test. Each adapter implements
//! [`SubjectAdapter`](injbench_domain::ports::SubjectAdapter) and registers
//! itself in the application's subject registry via `linkme`, so linking this
//! crate is enough to make the subjects resolvable by name.
//!
//! | Subject | Mechanism | Leaf `E` |
//! |---------|-----------|----------|
//! | `dill` | runtime catalog, `#[component]` constructor injection | new per dependent |
//! | `shaku` | compile-time `module!` with one hand-written provider per fixture type | new per provide |
//! | `manual` | hand-written constructor calls, no container | shared per build |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! injbench-subjects = { version = "0.1", default-features = false, features = ["subject-dill"] }
//! ```

#[cfg(feature = "subject-dill")]
pub mod dill_catalog;
#[cfg(feature = "subject-manual")]
pub mod manual;
#[cfg(feature = "subject-shaku")]
pub mod shaku_module;

#[cfg(feature = "subject-dill")]
pub use dill_catalog::{DillSubject, validated_catalog};
#[cfg(feature = "subject-manual")]
pub use manual::ManualSubject;
#[cfg(feature = "subject-shaku")]
pub use shaku_module::{FixtureModule, ShakuSubject};
