//! Type unification engine.
//!
//! Link-based unification with path compression. Variables are bound by
//! pointing their slot at another type (no substitution maps), and every
//! `prune` shortens the chain it walked so later lookups are direct.
//!
//! # Usage
//!
//! ```
//! use milner_types::{Idx, Pool, UnifyEngine};
//!
//! let mut pool = Pool::new();
//! let mut engine = UnifyEngine::new(&mut pool);
//!
//! let var = engine.fresh_var();
//! engine.unify(var, Idx::INT).unwrap();
//! assert_eq!(engine.prune(var), Idx::INT);
//! ```
//!
//! A failed `unify` does not roll back the bindings it made before the
//! failing argument pair. Treat the pool as spent once an error comes back.

mod error;

pub use error::UnifyError;

use crate::{Idx, Pool, Tag, VarState};

/// The unification engine.
///
/// Borrows the pool mutably for the length of one inference session.
pub struct UnifyEngine<'pool> {
    pool: &'pool mut Pool,
}

impl<'pool> UnifyEngine<'pool> {
    /// Create a new unification engine over `pool`.
    pub fn new(pool: &'pool mut Pool) -> Self {
        Self { pool }
    }

    /// Get read-only access to the pool.
    #[inline]
    pub fn pool(&self) -> &Pool {
        self.pool
    }

    /// Get mutable access to the pool (for type construction).
    #[inline]
    pub fn pool_mut(&mut self) -> &mut Pool {
        self.pool
    }

    /// Create a fresh unbound type variable.
    #[inline]
    pub fn fresh_var(&mut self) -> Idx {
        self.pool.fresh_var()
    }

    // ========================================
    // Resolution
    // ========================================

    /// Resolve a type to its representative.
    ///
    /// A bound variable is followed to the end of its chain and re-pointed
    /// directly at the representative. Anything else is returned as-is.
    /// The result is never a bound variable.
    pub fn prune(&mut self, idx: Idx) -> Idx {
        let Some(var_id) = self.pool.var_id(idx) else {
            return idx;
        };

        match self.pool.var_state(var_id) {
            VarState::Link { target } => {
                let resolved = self.prune(target);
                if resolved != target {
                    self.pool.set_link(var_id, resolved);
                }
                resolved
            }
            VarState::Unbound => idx,
        }
    }

    // ========================================
    // Occurs Check
    // ========================================

    /// Check if variable `var` occurs in `ty`.
    ///
    /// Types built without any variable skip the traversal.
    pub fn occurs_in_type(&mut self, var: Idx, ty: Idx) -> bool {
        let ty = self.prune(ty);
        if ty == var {
            return true;
        }
        if !self.pool.flags(ty).has_vars() {
            return false;
        }

        match self.pool.tag(ty) {
            Some(Tag::Operator) => {
                let args = self.pool.operator_args(ty);
                self.occurs_in(var, &args)
            }
            Some(Tag::Var) | None => false,
        }
    }

    /// Check if variable `var` occurs in any of `types`.
    pub fn occurs_in(&mut self, var: Idx, types: &[Idx]) -> bool {
        types.iter().any(|&ty| self.occurs_in_type(var, ty))
    }

    // ========================================
    // Unification
    // ========================================

    /// Unify two types, making them equivalent.
    ///
    /// Operator arguments are unified left to right and the first failure
    /// aborts the whole call; earlier argument pairs stay bound.
    pub fn unify(&mut self, t1: Idx, t2: Idx) -> Result<(), UnifyError> {
        let a = self.prune(t1);
        let b = self.prune(t2);

        match (self.pool.tag(a), self.pool.tag(b)) {
            (Some(Tag::Var), Some(_)) => {
                if a != b {
                    if self.occurs_in_type(a, b) {
                        return Err(UnifyError::InfiniteType { var: a, ty: b });
                    }
                    self.bind(a, b);
                }
                Ok(())
            }

            // Variable on right (swap to normalize)
            (Some(Tag::Operator), Some(Tag::Var)) => self.unify(b, a),

            (Some(Tag::Operator), Some(Tag::Operator)) => self.unify_operators(a, b),

            _ => Err(UnifyError::CannotUnify { left: a, right: b }),
        }
    }

    /// Unify two operators structurally.
    fn unify_operators(&mut self, a: Idx, b: Idx) -> Result<(), UnifyError> {
        // Hash-consing makes identical handles structurally equal
        if a == b {
            return Ok(());
        }

        let args_a = self.pool.operator_args(a);
        let args_b = self.pool.operator_args(b);

        if self.pool.operator_name_slot(a) != self.pool.operator_name_slot(b)
            || args_a.len() != args_b.len()
        {
            return Err(UnifyError::Mismatch { left: a, right: b });
        }

        for (&x, &y) in args_a.iter().zip(&args_b) {
            self.unify(x, y)?;
        }

        Ok(())
    }

    /// Bind an unbound variable to a (pruned) type.
    fn bind(&mut self, var: Idx, ty: Idx) {
        let Some(var_id) = self.pool.var_id(var) else {
            return;
        };
        debug_assert_eq!(self.pool.var_state(var_id), VarState::Unbound);
        tracing::trace!(
            var_id,
            ty = %self.pool.format_type(ty),
            "bind type variable"
        );
        self.pool.set_link(var_id, ty);
    }
}
