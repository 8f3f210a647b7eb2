//! Hand-wired baseline
//!
//! Calls the fixture constructors directly. There is no container to build,
//! which makes this subject the floor the DI mechanisms are compared against.
//! One `E` is created per resolve and shared by `D1` and `D2`.

use injbench_application::ports::registry::{SUBJECTS, SubjectEntry};
use injbench_domain::error::Result;
use injbench_domain::fixture::{A, B, C, D1, D2, E};
use injbench_domain::ports::{Subject, SubjectAdapter};
use std::sync::Arc;

/// Constructor-call baseline subject
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualSubject;

impl ManualSubject {
    pub fn new() -> Self {
        Self
    }
}

impl SubjectAdapter for ManualSubject {
    const LABEL: &'static str = "manual";
    type Container = ();
    type Root = A;

    fn build(&self) -> Result<()> {
        Ok(())
    }

    fn resolve(&self, _container: &()) -> Result<A> {
        let e = Arc::new(E::new());
        let c = C::new(Arc::new(D1::new(Arc::clone(&e))), Arc::new(D2::new(e)));
        Ok(A::new(Arc::new(B::new()), Arc::new(c)))
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn create_manual_subject() -> Box<dyn Subject> {
    Box::new(ManualSubject::new())
}

#[linkme::distributed_slice(SUBJECTS)]
static MANUAL_SUBJECT: SubjectEntry = SubjectEntry {
    name: ManualSubject::LABEL,
    description: "hand-written constructor wiring, no container",
    factory: create_manual_subject,
};
