//! Dependency graph fixture
//!
//! The six entity types every subject materializes:
//!
//! ```text
//! A ──┬── B
//!     └── C ──┬── D1 ── E
//!             └── D2 ── E
//! ```
//!
//! Dependencies are held as `Arc` so a subject decides for itself whether
//! `D1` and `D2` share one `E` (singleton per container) or get their own
//! (always new). The `new` constructors carry dill `#[component]` annotations
//! so the annotation-driven subject can wire the fixture by constructor
//! injection; every other subject calls them directly.

use crate::error::Error;
use dill::component;
use std::fmt;
use std::sync::Arc;

/// Root entity
#[derive(Debug)]
pub struct A {
    b: Arc<B>,
    c: Arc<C>,
}

#[component(pub)]
impl A {
    pub fn new(b: Arc<B>, c: Arc<C>) -> Self {
        Self { b, c }
    }

    pub fn b(&self) -> &B {
        &self.b
    }

    pub fn c(&self) -> &C {
        &self.c
    }
}

#[derive(Debug)]
pub struct B;

#[component(pub)]
impl B {
    pub fn new() -> Self {
        Self
    }
}

impl Default for B {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct C {
    d1: Arc<D1>,
    d2: Arc<D2>,
}

#[component(pub)]
impl C {
    pub fn new(d1: Arc<D1>, d2: Arc<D2>) -> Self {
        Self { d1, d2 }
    }

    pub fn d1(&self) -> &D1 {
        &self.d1
    }

    pub fn d2(&self) -> &D2 {
        &self.d2
    }
}

#[derive(Debug)]
pub struct D1 {
    e: Arc<E>,
}

#[component(pub)]
impl D1 {
    pub fn new(e: Arc<E>) -> Self {
        Self { e }
    }

    pub fn e(&self) -> &Arc<E> {
        &self.e
    }
}

#[derive(Debug)]
pub struct D2 {
    e: Arc<E>,
}

#[component(pub)]
impl D2 {
    pub fn new(e: Arc<E>) -> Self {
        Self { e }
    }

    pub fn e(&self) -> &Arc<E> {
        &self.e
    }
}

/// Leaf entity
#[derive(Debug)]
pub struct E;

#[component(pub)]
impl E {
    pub fn new() -> Self {
        Self
    }
}

impl Default for E {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies a fixture type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    A,
    B,
    C,
    D1,
    D2,
    E,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::E => "E",
        };
        f.write_str(name)
    }
}

/// Implemented by every fixture type to describe the subgraph it roots
pub trait FixtureNode {
    /// Entity kind of this node
    const ENTITY: Entity;

    /// Structural snapshot of this node and everything it holds
    fn shape(&self) -> GraphShape;
}

impl FixtureNode for A {
    const ENTITY: Entity = Entity::A;

    fn shape(&self) -> GraphShape {
        GraphShape::node(Self::ENTITY, vec![self.b.shape(), self.c.shape()])
    }
}

impl FixtureNode for B {
    const ENTITY: Entity = Entity::B;

    fn shape(&self) -> GraphShape {
        GraphShape::leaf(Self::ENTITY)
    }
}

impl FixtureNode for C {
    const ENTITY: Entity = Entity::C;

    fn shape(&self) -> GraphShape {
        GraphShape::node(Self::ENTITY, vec![self.d1.shape(), self.d2.shape()])
    }
}

impl FixtureNode for D1 {
    const ENTITY: Entity = Entity::D1;

    fn shape(&self) -> GraphShape {
        GraphShape::node(Self::ENTITY, vec![self.e.shape()])
    }
}

impl FixtureNode for D2 {
    const ENTITY: Entity = Entity::D2;

    fn shape(&self) -> GraphShape {
        GraphShape::node(Self::ENTITY, vec![self.e.shape()])
    }
}

impl FixtureNode for E {
    const ENTITY: Entity = Entity::E;

    fn shape(&self) -> GraphShape {
        GraphShape::leaf(Self::ENTITY)
    }
}

/// Structural snapshot of a resolved graph
///
/// Two snapshots compare equal when they have the same entities in the same
/// positions; instance identity is not part of the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphShape {
    entity: Entity,
    dependencies: Vec<GraphShape>,
}

impl GraphShape {
    fn node(entity: Entity, dependencies: Vec<GraphShape>) -> Self {
        Self {
            entity,
            dependencies,
        }
    }

    fn leaf(entity: Entity) -> Self {
        Self::node(entity, Vec::new())
    }

    /// Snapshot of the graph held by a resolved root
    pub fn of(root: &A) -> Self {
        root.shape()
    }

    /// The shape every subject must produce
    pub fn expected() -> Self {
        let d1 = Self::node(Entity::D1, vec![Self::leaf(Entity::E)]);
        let d2 = Self::node(Entity::D2, vec![Self::leaf(Entity::E)]);
        let c = Self::node(Entity::C, vec![d1, d2]);
        Self::node(Entity::A, vec![Self::leaf(Entity::B), c])
    }

    /// Check a resolved root against the fixture shape
    pub fn verify(root: &A) -> crate::error::Result<Self> {
        let actual = Self::of(root);
        let expected = Self::expected();
        if actual != expected {
            return Err(Error::configuration(format!(
                "Resolved graph {actual} does not match fixture {expected}"
            )));
        }
        Ok(actual)
    }

    /// Number of entity instances reachable from this node, counting a
    /// shared leaf once per dependent
    pub fn node_count(&self) -> usize {
        1 + self
            .dependencies
            .iter()
            .map(GraphShape::node_count)
            .sum::<usize>()
    }
}

impl fmt::Display for GraphShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entity)?;
        if self.dependencies.is_empty() {
            return Ok(());
        }
        write!(f, "(")?;
        for (i, dep) in self.dependencies.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{dep}")?;
        }
        write!(f, ")")
    }
}

/// Whether `D1` and `D2` were handed the same leaf instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafScope {
    /// One `E` per container, shared by both dependents
    Shared,
    /// A fresh `E` for each dependent
    Distinct,
}

impl LeafScope {
    pub fn of(root: &A) -> Self {
        let c = root.c();
        if Arc::ptr_eq(c.d1().e(), c.d2().e()) {
            Self::Shared
        } else {
            Self::Distinct
        }
    }
}

impl fmt::Display for LeafScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shared => write!(f, "shared"),
            Self::Distinct => write!(f, "distinct"),
        }
    }
}
