//! Unification error types.
//!
//! These refer to types by `Idx`, so they only make sense next to the pool
//! they came from. The analyser renders them into a [`TypeError`] before
//! they leave the engine.
//!
//! [`TypeError`]: crate::TypeError

use crate::Idx;

/// Error from type unification.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnifyError {
    /// Two operators with different names or arities.
    Mismatch {
        /// Left side, pruned.
        left: Idx,
        /// Right side, pruned.
        right: Idx,
    },

    /// Occurs check failed: binding `var` to `ty` would make an infinite
    /// type, as in `a = (a -> b)`.
    InfiniteType {
        /// The variable that would contain itself.
        var: Idx,
        /// The type it occurs in.
        ty: Idx,
    },

    /// At least one side does not denote a type in the pool.
    CannotUnify {
        /// Left side, pruned.
        left: Idx,
        /// Right side, pruned.
        right: Idx,
    },
}
