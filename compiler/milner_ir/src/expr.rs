//! Flat expression tree.
//!
//! Nodes live in an [`ExprArena`] and refer to their children by
//! [`ExprId`] instead of `Box`. A node is immutable once allocated and is
//! owned by exactly one parent; the arena only ever grows.

use std::fmt;

use crate::{Name, StringInterner};

/// Index into an expression arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Invalid expression ID (sentinel value).
    pub const INVALID: ExprId = ExprId(u32::MAX);

    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a valid ID.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ExprId({})", self.0)
        } else {
            write!(f, "ExprId::INVALID")
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Expression node kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ExprKind {
    /// Reference to a name bound by the environment or an enclosing binder.
    Ident(Name),

    /// `λparam. body`
    Lambda { param: Name, body: ExprId },

    /// `func arg`
    Apply { func: ExprId, arg: ExprId },

    /// `let name = value in body`
    ///
    /// Non-recursive: `name` is not in scope inside `value`.
    Let {
        name: Name,
        value: ExprId,
        body: ExprId,
    },

    /// `letrec name = value in body`
    ///
    /// `name` is in scope inside both `value` and `body`.
    Letrec {
        name: Name,
        value: ExprId,
        body: ExprId,
    },
}

/// Arena owning every node of one or more expression trees.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<ExprKind>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self { exprs: Vec::new() }
    }

    /// Allocate a node, returning its id.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX` nodes.
    pub fn alloc(&mut self, kind: ExprKind) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .ok()
            .filter(|&index| index != u32::MAX)
            .unwrap_or_else(|| panic!("expression arena exceeded {} nodes", u32::MAX - 1));
        self.exprs.push(kind);
        ExprId::new(index)
    }

    /// Get a node by id.
    ///
    /// Returns `None` for `ExprId::INVALID` and ids from other arenas that
    /// fall outside this one.
    #[inline]
    pub fn get(&self, id: ExprId) -> Option<&ExprKind> {
        self.exprs.get(id.index())
    }

    /// Number of allocated nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Check if no nodes have been allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    // === Node Constructors ===

    /// Allocate an identifier reference.
    pub fn ident(&mut self, name: Name) -> ExprId {
        self.alloc(ExprKind::Ident(name))
    }

    /// Allocate `λparam. body`.
    pub fn lambda(&mut self, param: Name, body: ExprId) -> ExprId {
        self.alloc(ExprKind::Lambda { param, body })
    }

    /// Allocate `func arg`.
    pub fn apply(&mut self, func: ExprId, arg: ExprId) -> ExprId {
        self.alloc(ExprKind::Apply { func, arg })
    }

    /// Allocate the curried application `func arg0 arg1 ...`.
    ///
    /// With no arguments this returns `func` itself.
    pub fn apply_all(&mut self, func: ExprId, args: &[ExprId]) -> ExprId {
        args.iter().fold(func, |acc, &arg| self.apply(acc, arg))
    }

    /// Allocate `let name = value in body`.
    pub fn let_in(&mut self, name: Name, value: ExprId, body: ExprId) -> ExprId {
        self.alloc(ExprKind::Let { name, value, body })
    }

    /// Allocate `letrec name = value in body`.
    pub fn letrec_in(&mut self, name: Name, value: ExprId, body: ExprId) -> ExprId {
        self.alloc(ExprKind::Letrec { name, value, body })
    }

    // === Rendering ===

    /// Render an expression.
    ///
    /// Identifiers render as their name, lambdas as `(λx. body)`,
    /// applications as `(f x)`, and bindings as `(let x = v in body)` or
    /// `(letrec x = v in body)`.
    pub fn display<'a>(&'a self, id: ExprId, interner: &'a StringInterner) -> ExprDisplay<'a> {
        ExprDisplay {
            arena: self,
            interner,
            id,
        }
    }
}

/// `Display` adapter returned by [`ExprArena::display`].
pub struct ExprDisplay<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    id: ExprId,
}

impl ExprDisplay<'_> {
    fn child(&self, id: ExprId) -> Self {
        ExprDisplay {
            arena: self.arena,
            interner: self.interner,
            id,
        }
    }
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(kind) = self.arena.get(self.id) else {
            return write!(f, "<unresolved {:?}>", self.id);
        };
        let name = |n: Name| self.interner.lookup(n);

        match *kind {
            ExprKind::Ident(n) => f.write_str(name(n)),
            ExprKind::Lambda { param, body } => {
                write!(f, "(λ{}. {})", name(param), self.child(body))
            }
            ExprKind::Apply { func, arg } => {
                write!(f, "({} {})", self.child(func), self.child(arg))
            }
            ExprKind::Let {
                name: bound,
                value,
                body,
            } => write!(
                f,
                "(let {} = {} in {})",
                name(bound),
                self.child(value),
                self.child(body)
            ),
            ExprKind::Letrec {
                name: bound,
                value,
                body,
            } => write!(
                f,
                "(letrec {} = {} in {})",
                name(bound),
                self.child(value),
                self.child(body)
            ),
        }
    }
}
