//! Subject ports
//!
//! A subject is one DI mechanism under test. Adapters implement the typed
//! two-step protocol ([`SubjectAdapter`]); the runner drives them through the
//! object-safe [`Subject`] view so heterogeneous containers can sit in one
//! ordered list.
//!
//! ## Example
//!
//! ```ignore
//! use injbench_domain::fixture::A;
//! use injbench_domain::ports::SubjectAdapter;
//!
//! struct MySubject;
//!
//! impl SubjectAdapter for MySubject {
//!     const LABEL: &'static str = "mine";
//!     type Container = MyContainer;
//!     type Root = Arc<A>;
//!
//!     fn build(&self) -> Result<MyContainer> { ... }
//!     fn resolve(&self, container: &MyContainer) -> Result<Arc<A>> { ... }
//! }
//! ```

use crate::error::Result;
use crate::fixture::A;
use std::borrow::Borrow;

/// Typed build/resolve protocol of a DI mechanism
///
/// `build` must return a fresh container wired with the whole fixture and
/// must not resolve anything; wiring failures are configuration errors.
/// `resolve` asks the container for the root entity and returns it fully
/// constructed; failures are resolution errors. Adapters keep their wiring
/// in the container they build and never in process-wide state.
pub trait SubjectAdapter {
    /// Label used in logs and reports
    const LABEL: &'static str;

    /// Configured container or injector
    type Container;

    /// Handle to the resolved root entity
    type Root: Borrow<A>;

    /// Create a new container bound to the fixture types
    fn build(&self) -> Result<Self::Container>;

    /// Resolve the root entity, constructing the whole graph
    fn resolve(&self, container: &Self::Container) -> Result<Self::Root>;
}

/// Object-safe view of a subject used by the benchmark runner
pub trait Subject {
    /// Label used in logs and reports
    fn label(&self) -> &str;

    /// One unit of work: build a container, resolve the root, drop the
    /// container, then hand the root to `inspect`
    fn run_once(&self, inspect: &mut dyn FnMut(&A)) -> Result<()>;
}

impl<T: SubjectAdapter> Subject for T {
    fn label(&self) -> &str {
        T::LABEL
    }

    fn run_once(&self, inspect: &mut dyn FnMut(&A)) -> Result<()> {
        let container = self.build()?;
        let root = self.resolve(&container)?;
        drop(container);
        inspect(root.borrow());
        Ok(())
    }
}
