//! dill subject tests

use dill::CatalogBuilder;
use injbench_domain::fixture::{A, B, C, D1, D2};
use injbench_domain::ports::{Subject, SubjectAdapter};
use injbench_domain::{GraphShape, LeafScope};
use injbench_subjects::{DillSubject, validated_catalog};
use std::sync::Arc;

#[test]
fn test_resolves_fixture_shape() {
    let subject = DillSubject::new();
    let catalog = subject.build().expect("catalog builds");
    let root = subject.resolve(&catalog).expect("A resolves");

    GraphShape::verify(&root).expect("shape matches fixture");
}

#[test]
fn test_independent_runs_are_structurally_identical() {
    let subject = DillSubject::new();
    let first = subject.resolve(&subject.build().unwrap()).unwrap();
    let second = subject.resolve(&subject.build().unwrap()).unwrap();

    assert_eq!(GraphShape::of(&first), GraphShape::of(&second));
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_transient_leaf_is_not_shared() {
    let subject = DillSubject::new();
    let root = subject.resolve(&subject.build().unwrap()).unwrap();
    assert_eq!(LeafScope::of(&root), LeafScope::Distinct);
}

#[test]
fn test_run_once_through_object_safe_view() {
    let subject: Box<dyn Subject> = Box::new(DillSubject::new());
    let mut inspected = 0;
    subject
        .run_once(&mut |root| {
            inspected += 1;
            assert_eq!(GraphShape::of(root), GraphShape::expected());
        })
        .expect("run succeeds");
    assert_eq!(inspected, 1);
    assert_eq!(subject.label(), "dill");
}

#[test]
fn test_catalog_missing_leaf_is_configuration_error() {
    let mut builder = CatalogBuilder::new();
    builder
        .add::<A>()
        .add::<B>()
        .add::<C>()
        .add::<D1>()
        .add::<D2>();

    let err = validated_catalog(builder).expect_err("E has no builder");
    assert!(err.is_configuration());
}

#[test]
fn test_complete_catalog_validates() {
    let catalog = DillSubject::new().build().expect("all six types registered");
    assert!(catalog.get_one::<A>().is_ok());
}
