//! Type environment for the analyser.
//!
//! Maps identifiers to types with lexical scoping. A binding's type is
//! stored as-is; it is instantiated on each lookup by `get_type`, which
//! is where let-polymorphism happens.

use std::rc::Rc;

use milner_ir::Name;
use rustc_hash::FxHashMap;

use crate::Idx;

/// Internal storage for `TypeEnv`.
#[derive(Clone, Debug)]
struct TypeEnvInner {
    bindings: FxHashMap<Name, Idx>,
    /// Parent scope for lookup chaining.
    parent: Option<TypeEnv>,
}

/// Type environment.
///
/// Cloning is O(1) and scopes share their parents, so extending an
/// environment for a binder never disturbs the one it came from.
///
/// # Usage
///
/// ```
/// use milner_ir::StringInterner;
/// use milner_types::{Idx, TypeEnv};
///
/// let interner = StringInterner::new();
/// let x = interner.intern("x");
///
/// let outer = TypeEnv::new();
/// let inner = outer.extended(x, Idx::INT);
///
/// assert_eq!(inner.lookup(x), Some(Idx::INT));
/// assert_eq!(outer.lookup(x), None);
/// ```
#[derive(Clone, Debug)]
pub struct TypeEnv(Rc<TypeEnvInner>);

impl TypeEnv {
    /// Create a new empty environment.
    pub fn new() -> Self {
        TypeEnv(Rc::new(TypeEnvInner {
            bindings: FxHashMap::default(),
            parent: None,
        }))
    }

    /// Create a child scope.
    #[must_use]
    pub fn child(&self) -> Self {
        TypeEnv(Rc::new(TypeEnvInner {
            bindings: FxHashMap::default(),
            parent: Some(self.clone()),
        }))
    }

    /// Bind a name in the current scope, replacing any binding it had here.
    pub fn bind(&mut self, name: Name, ty: Idx) {
        Rc::make_mut(&mut self.0).bindings.insert(name, ty);
    }

    /// A child scope holding the single binding `name → ty`.
    #[must_use]
    pub fn extended(&self, name: Name, ty: Idx) -> Self {
        let mut child = self.child();
        child.bind(name, ty);
        child
    }

    /// Look up a name, searching parent scopes. Inner bindings shadow
    /// outer ones.
    pub fn lookup(&self, name: Name) -> Option<Idx> {
        self.0
            .bindings
            .get(&name)
            .copied()
            .or_else(|| self.0.parent.as_ref().and_then(|p| p.lookup(name)))
    }
}

impl Default for TypeEnv {
    fn default() -> Self {
        Self::new()
    }
}
