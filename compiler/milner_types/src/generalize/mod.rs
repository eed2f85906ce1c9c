//! Generalization and instantiation.
//!
//! There is no explicit `∀` in this engine. A binding in the environment
//! is implicitly polymorphic over every variable in it that is not pinned
//! by the current [`NonGeneric`] set, and each use of the binding gets a
//! private copy of those variables from [`UnifyEngine::fresh`]. What one
//! use site learns by unification therefore never reaches another.

mod non_generic;

pub use non_generic::NonGeneric;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::stack::ensure_sufficient_stack;
use crate::{Idx, Tag, UnifyEngine};

impl UnifyEngine<'_> {
    /// Check if `var` may be generalized.
    ///
    /// A variable is generic unless it occurs in some member of
    /// `non_generic`; occurrence is checked through bindings, so a variable
    /// reachable from a pinned one is pinned too.
    pub fn is_generic(&mut self, var: Idx, non_generic: &NonGeneric) -> bool {
        let pinned: SmallVec<[Idx; 8]> = non_generic.iter().collect();
        !self.occurs_in(var, &pinned)
    }

    /// Instantiate `ty`: copy it with every generic variable replaced by a
    /// new one.
    ///
    /// Replacement is consistent within one call, so `(a -> a)` becomes
    /// `(b -> b)`, never `(b -> c)`. Non-generic variables are shared with
    /// the original, as are operators that contain no variables at all.
    pub fn fresh(&mut self, ty: Idx, non_generic: &NonGeneric) -> Idx {
        let mut mappings = FxHashMap::default();
        self.fresh_rec(ty, non_generic, &mut mappings)
    }

    fn fresh_rec(
        &mut self,
        ty: Idx,
        non_generic: &NonGeneric,
        mappings: &mut FxHashMap<Idx, Idx>,
    ) -> Idx {
        ensure_sufficient_stack(|| {
            let pruned = self.prune(ty);

            match self.pool().tag(pruned) {
                Some(Tag::Var) => {
                    if !self.is_generic(pruned, non_generic) {
                        return pruned;
                    }
                    if let Some(&copy) = mappings.get(&pruned) {
                        return copy;
                    }
                    let copy = self.fresh_var();
                    mappings.insert(pruned, copy);
                    copy
                }

                Some(Tag::Operator) => {
                    if !self.pool().flags(pruned).has_vars() {
                        return pruned;
                    }
                    let Some(slot) = self.pool().operator_name_slot(pruned) else {
                        return pruned;
                    };
                    let args: SmallVec<[Idx; 2]> = self
                        .pool()
                        .operator_args(pruned)
                        .into_iter()
                        .map(|arg| self.fresh_rec(arg, non_generic, mappings))
                        .collect();
                    self.pool_mut().intern_operator(slot, &args)
                }

                None => pruned,
            }
        })
    }
}

#[cfg(test)]
mod tests;
