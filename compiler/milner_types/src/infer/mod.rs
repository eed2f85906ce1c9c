//! Type inference engine.
//!
//! `InferEngine` wraps `UnifyEngine` with what the analyser needs on top of
//! unification: access to identifier spellings for error messages, and
//! environment lookups with instantiation.
//!
//! # Usage
//!
//! ```
//! use milner_ir::{ExprArena, StringInterner};
//! use milner_types::{infer, Pool, TypeEnv};
//!
//! let interner = StringInterner::new();
//! let mut arena = ExprArena::new();
//! let x = interner.intern("x");
//! let body = arena.ident(x);
//! let id = arena.lambda(x, body);
//!
//! let mut pool = Pool::new();
//! let ty = infer(&mut pool, &interner, &arena, id, &TypeEnv::new()).unwrap();
//! assert_eq!(pool.normalized(ty), "(a -> a)");
//! ```

mod env;
mod expr;

pub use env::TypeEnv;
pub use expr::{analyse, analyse_in};

use milner_ir::{ExprArena, ExprId, Name, StringInterner};

use crate::{Idx, NonGeneric, Pool, TypeError, UnifyEngine};

/// The type inference engine.
///
/// One engine serves one inference session over one pool.
pub struct InferEngine<'pool> {
    unify: UnifyEngine<'pool>,
    interner: &'pool StringInterner,
}

impl<'pool> InferEngine<'pool> {
    /// Create a new inference engine.
    pub fn new(pool: &'pool mut Pool, interner: &'pool StringInterner) -> Self {
        Self {
            unify: UnifyEngine::new(pool),
            interner,
        }
    }

    // ========================================
    // Component Access
    // ========================================

    /// Get the unification engine.
    #[inline]
    pub fn unify(&mut self) -> &mut UnifyEngine<'pool> {
        &mut self.unify
    }

    /// Get read-only access to the pool.
    #[inline]
    pub fn pool(&self) -> &Pool {
        self.unify.pool()
    }

    /// Get the interner used for identifier spellings.
    #[inline]
    pub fn interner(&self) -> &'pool StringInterner {
        self.interner
    }

    // ========================================
    // Environment
    // ========================================

    /// Look up `name` and instantiate its type.
    ///
    /// Every use of a binding gets its own copy of the binding's generic
    /// variables; variables pinned by `non_generic` are shared.
    pub fn get_type(
        &mut self,
        name: Name,
        env: &TypeEnv,
        non_generic: &NonGeneric,
    ) -> Result<Idx, TypeError> {
        let Some(ty) = env.lookup(name) else {
            return Err(TypeError::UndefinedSymbol {
                name: self.interner.lookup(name).to_owned(),
            });
        };
        Ok(self.unify.fresh(ty, non_generic))
    }

    // ========================================
    // Unification
    // ========================================

    /// Unify two types, rendering any failure against the pool.
    pub fn unify_types(&mut self, t1: Idx, t2: Idx) -> Result<(), TypeError> {
        self.unify
            .unify(t1, t2)
            .map_err(|err| TypeError::from_unify(&err, self.unify.pool()))
    }
}

/// Infer the type of `expr` under `env`.
///
/// Convenience entry point: builds an engine over `pool` and runs
/// [`analyse`]. On failure the pool may hold partial bindings and should
/// not be reused for further inference.
pub fn infer(
    pool: &mut Pool,
    interner: &StringInterner,
    arena: &ExprArena,
    expr: ExprId,
    env: &TypeEnv,
) -> Result<Idx, TypeError> {
    let mut engine = InferEngine::new(pool, interner);
    let ty = analyse(&mut engine, arena, expr, env)?;
    tracing::debug!(ty = %engine.pool().format_type(ty), "inferred expression type");
    Ok(ty)
}
