//! Benchmark Subject Registry
//!
//! Subject adapters register themselves via `linkme::distributed_slice` and
//! are looked up by name when a session is assembled.
//!
//! ## Registering a Subject (in injbench-subjects)
//!
//! ```ignore
//! use injbench_application::ports::registry::{SubjectEntry, SUBJECTS};
//!
//! #[linkme::distributed_slice(SUBJECTS)]
//! static DILL_SUBJECT: SubjectEntry = SubjectEntry {
//!     name: "dill",
//!     description: "dill runtime catalog with #[component] constructor injection",
//!     factory: || Box::new(DillSubject::new()),
//! };
//! ```

use injbench_domain::error::{Error, Result};
use injbench_domain::ports::Subject;
use std::collections::HashSet;

/// Registry entry for benchmark subjects
pub struct SubjectEntry {
    /// Unique subject name, equal to the label the subject reports under
    pub name: &'static str,
    /// Human-readable description of the DI mechanism
    pub description: &'static str,
    /// Factory creating an independent adapter instance
    pub factory: fn() -> Box<dyn Subject>,
}

#[linkme::distributed_slice]
pub static SUBJECTS: [SubjectEntry] = [..];

/// Resolve a subject by name from the registry
///
/// Fails with a configuration error naming the available subjects when no
/// entry matches, or when the created adapter reports a different label.
pub fn resolve_subject(name: &str) -> Result<Box<dyn Subject>> {
    let Some(entry) = SUBJECTS.iter().find(|entry| entry.name == name) else {
        let available: Vec<&str> = list_subjects().into_iter().map(|(n, _)| n).collect();
        return Err(Error::configuration(format!(
            "Unknown subject '{name}'. Available subjects: {available:?}"
        )));
    };

    let subject = (entry.factory)();
    if subject.label() != entry.name {
        return Err(Error::configuration(format!(
            "Subject registered as '{}' reports label '{}'",
            entry.name,
            subject.label()
        )));
    }
    Ok(subject)
}

/// Resolve an ordered list of subjects
///
/// The returned adapters keep the order of `names`. An empty list or a name
/// given twice is a configuration error.
pub fn resolve_subjects<S: AsRef<str>>(names: &[S]) -> Result<Vec<Box<dyn Subject>>> {
    if names.is_empty() {
        return Err(Error::configuration("At least one subject must be configured"));
    }

    let mut seen = HashSet::new();
    let mut subjects = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        if !seen.insert(name) {
            return Err(Error::configuration(format!(
                "Subject '{name}' is configured more than once"
            )));
        }
        subjects.push(resolve_subject(name)?);
    }
    Ok(subjects)
}

/// List all registered subjects
///
/// Returns `(name, description)` pairs sorted by name. Useful for CLI help.
pub fn list_subjects() -> Vec<(&'static str, &'static str)> {
    let mut subjects: Vec<(&'static str, &'static str)> = SUBJECTS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    subjects.sort_unstable_by_key(|(name, _)| *name);
    subjects
}
