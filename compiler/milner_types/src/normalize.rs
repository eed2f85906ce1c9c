//! Canonical variable numbering.
//!
//! Variable ids depend on everything allocated before them, so the same
//! inferred type can print as `(d -> d)` in one run and `(k -> k)` in
//! another. Normalizing renames the unbound variables of a type by
//! ascending id: the lowest becomes `a`, the next `b`, and so on.

use rustc_hash::FxHashMap;

use crate::stack::ensure_sufficient_stack;
use crate::{Idx, Pool, Tag};

impl Pool {
    /// Unbound variable ids reachable from `idx`, ascending, without
    /// duplicates.
    pub fn free_vars(&self, idx: Idx) -> Vec<u32> {
        let mut vars = Vec::new();
        self.collect_free_vars(idx, &mut vars);
        vars.sort_unstable();
        vars.dedup();
        vars
    }

    fn collect_free_vars(&self, idx: Idx, vars: &mut Vec<u32>) {
        ensure_sufficient_stack(|| {
            let idx = self.resolve_readonly(idx);
            if !self.flags(idx).has_vars() {
                return;
            }
            match self.tag(idx) {
                Some(Tag::Var) => vars.extend(self.var_id(idx)),
                Some(Tag::Operator) => {
                    for arg in self.operator_args(idx) {
                        self.collect_free_vars(arg, vars);
                    }
                }
                None => {}
            }
        });
    }

    /// Format a type with its variables renumbered from `a`.
    ///
    /// Two types that differ only in variable ids format identically.
    pub fn normalized(&self, idx: Idx) -> String {
        let ordinals: FxHashMap<u32, usize> = self
            .free_vars(idx)
            .into_iter()
            .enumerate()
            .map(|(ordinal, var_id)| (var_id, ordinal))
            .collect();

        let mut buf = String::new();
        self.write_type(idx, &mut buf, &|var_id| {
            ordinals
                .get(&var_id)
                .copied()
                .unwrap_or(var_id as usize)
        });
        buf
    }
}
