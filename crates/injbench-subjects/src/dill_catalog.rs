//! dill subject
//!
//! Builds a fresh `dill::Catalog` from the `#[component]`-annotated fixture
//! types and asks it for `A`. The catalog only records builders; every
//! instance is created on `get_one`, with dill's default transient scope.

use dill::{Catalog, CatalogBuilder};
use injbench_application::ports::registry::{SUBJECTS, SubjectEntry};
use injbench_domain::error::{Error, Result};
use injbench_domain::fixture::{A, B, C, D1, D2, E};
use injbench_domain::ports::{Subject, SubjectAdapter};
use std::sync::Arc;

/// dill runtime catalog subject
#[derive(Debug, Default, Clone, Copy)]
pub struct DillSubject;

impl DillSubject {
    pub fn new() -> Self {
        Self
    }
}

impl SubjectAdapter for DillSubject {
    const LABEL: &'static str = "dill";
    type Container = Catalog;
    type Root = Arc<A>;

    fn build(&self) -> Result<Catalog> {
        let mut builder = CatalogBuilder::new();
        builder
            .add::<A>()
            .add::<B>()
            .add::<C>()
            .add::<D1>()
            .add::<D2>()
            .add::<E>();
        validated_catalog(builder)
    }

    fn resolve(&self, catalog: &Catalog) -> Result<Arc<A>> {
        catalog
            .get_one::<A>()
            .map_err(|e| Error::resolution(Self::LABEL, e.to_string()))
    }
}

/// Validate the dependency graph of `builder` and build its catalog
pub fn validated_catalog(mut builder: CatalogBuilder) -> Result<Catalog> {
    builder.validate().map_err(|e| {
        Error::configuration_with_source("dill catalog cannot wire the fixture", e)
    })?;
    Ok(builder.build())
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn create_dill_subject() -> Box<dyn Subject> {
    Box::new(DillSubject::new())
}

#[linkme::distributed_slice(SUBJECTS)]
static DILL_SUBJECT: SubjectEntry = SubjectEntry {
    name: DillSubject::LABEL,
    description: "dill runtime catalog with #[component] constructor injection",
    factory: create_dill_subject,
};
