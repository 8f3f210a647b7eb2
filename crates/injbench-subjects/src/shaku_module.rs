//! shaku subject
//!
//! A compile-time `module!` that binds every fixture type through a
//! `Provider`. Providers are created on demand, so building the module does
//! no fixture work and each `provide` call yields a fresh instance.
//!
//! The providers are written by hand because the fixture types live in the
//! domain crate and hold their dependencies as concrete `Arc`s rather than
//! injected trait objects. Each provider resolves its dependencies through
//! `HasProvider` and calls the type's constructor, so a measured run covers
//! module building and provider dispatch rather than derived wiring.

use injbench_application::ports::registry::{SUBJECTS, SubjectEntry};
use injbench_domain::error::{Error, Result};
use injbench_domain::fixture::{A, B, C, D1, D2, E};
use injbench_domain::ports::{Subject, SubjectAdapter};
use shaku::{HasProvider, Provider, module};
use std::error::Error as StdError;
use std::sync::Arc;

module! {
    pub FixtureModule {
        components = [],
        providers = [A, B, C, D1, D2, E]
    }
}

impl Provider<FixtureModule> for A {
    type Interface = A;

    fn provide(module: &FixtureModule) -> std::result::Result<Box<A>, Box<dyn StdError>> {
        let b = HasProvider::<B>::provide(module)?;
        let c = HasProvider::<C>::provide(module)?;
        Ok(Box::new(A::new(Arc::from(b), Arc::from(c))))
    }
}

impl Provider<FixtureModule> for B {
    type Interface = B;

    fn provide(_: &FixtureModule) -> std::result::Result<Box<B>, Box<dyn StdError>> {
        Ok(Box::new(B::new()))
    }
}

impl Provider<FixtureModule> for C {
    type Interface = C;

    fn provide(module: &FixtureModule) -> std::result::Result<Box<C>, Box<dyn StdError>> {
        let d1 = HasProvider::<D1>::provide(module)?;
        let d2 = HasProvider::<D2>::provide(module)?;
        Ok(Box::new(C::new(Arc::from(d1), Arc::from(d2))))
    }
}

impl Provider<FixtureModule> for D1 {
    type Interface = D1;

    fn provide(module: &FixtureModule) -> std::result::Result<Box<D1>, Box<dyn StdError>> {
        let e = HasProvider::<E>::provide(module)?;
        Ok(Box::new(D1::new(Arc::from(e))))
    }
}

impl Provider<FixtureModule> for D2 {
    type Interface = D2;

    fn provide(module: &FixtureModule) -> std::result::Result<Box<D2>, Box<dyn StdError>> {
        let e = HasProvider::<E>::provide(module)?;
        Ok(Box::new(D2::new(Arc::from(e))))
    }
}

impl Provider<FixtureModule> for E {
    type Interface = E;

    fn provide(_: &FixtureModule) -> std::result::Result<Box<E>, Box<dyn StdError>> {
        Ok(Box::new(E::new()))
    }
}

/// shaku module subject
#[derive(Debug, Default, Clone, Copy)]
pub struct ShakuSubject;

impl ShakuSubject {
    pub fn new() -> Self {
        Self
    }
}

impl SubjectAdapter for ShakuSubject {
    const LABEL: &'static str = "shaku";
    type Container = FixtureModule;
    type Root = Box<A>;

    fn build(&self) -> Result<FixtureModule> {
        Ok(FixtureModule::builder().build())
    }

    fn resolve(&self, module: &FixtureModule) -> Result<Box<A>> {
        HasProvider::<A>::provide(module).map_err(|e| Error::resolution(Self::LABEL, e.to_string()))
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn create_shaku_subject() -> Box<dyn Subject> {
    Box::new(ShakuSubject::new())
}

#[linkme::distributed_slice(SUBJECTS)]
static SHAKU_SUBJECT: SubjectEntry = SubjectEntry {
    name: ShakuSubject::LABEL,
    description: "shaku compile-time module with a provider per fixture type",
    factory: create_shaku_subject,
};
