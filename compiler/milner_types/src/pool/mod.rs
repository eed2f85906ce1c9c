//! Type storage.
//!
//! The `Pool` is the arena every type lives in, and it doubles as the
//! inference session: variable ids come from its counter, so two pools
//! never hand out clashing variables and a test can rely on ids starting
//! at zero.
//!
//! # Layout
//!
//! - `items`: one `(tag, data)` entry per type, addressed by `Idx`
//! - `flags`: pre-computed `TypeFlags`, parallel to `items`
//! - `extra`: operator payloads, `[name, arg_count, arg0, arg1, ...]`
//! - `var_states`: one `VarState` per variable, addressed by variable id
//!
//! Operators are hash-consed: building the same operator over the same
//! argument handles twice returns the same `Idx`. Variables are never
//! shared this way; every `fresh_var` call allocates a new one.

mod construct;
mod format;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{Idx, Tag, TypeFlags};

/// Binding state of a type variable.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VarState {
    /// Not yet unified with anything.
    Unbound,
    /// Unified with `target`; the variable is transparent.
    Link { target: Idx },
}

/// One pool entry.
#[derive(Copy, Clone, Debug)]
struct Item {
    tag: Tag,
    /// Variable id for `Tag::Var`, offset into `extra` for `Tag::Operator`.
    data: u32,
}

/// Arena of types.
pub struct Pool {
    items: Vec<Item>,
    flags: Vec<TypeFlags>,
    extra: Vec<u32>,
    var_states: Vec<VarState>,
    /// Operator names, indexed by the name slot stored in `extra`.
    names: Vec<Box<str>>,
    name_lookup: FxHashMap<Box<str>, u32>,
    /// Hash-consing table: operator payload to its index.
    operators: FxHashMap<Box<[u32]>, Idx>,
}

impl Pool {
    /// Operator name of the function type.
    pub const FUNCTION: &'static str = "->";
    /// Operator name of the product type.
    pub const PRODUCT: &'static str = "*";

    /// Create a pool holding the built-in `int`, `bool` and `string`.
    pub fn new() -> Self {
        let mut pool = Self {
            items: Vec::with_capacity(64),
            flags: Vec::with_capacity(64),
            extra: Vec::with_capacity(256),
            var_states: Vec::with_capacity(32),
            names: Vec::new(),
            name_lookup: FxHashMap::default(),
            operators: FxHashMap::default(),
        };

        for primitive in [Idx::INT, Idx::BOOL, Idx::STR] {
            let name = primitive.name().unwrap_or_default();
            let idx = pool.operator(name, &[]);
            debug_assert_eq!(idx, primitive);
        }
        debug_assert_eq!(pool.len(), Idx::PRIMITIVE_COUNT as usize);

        pool
    }

    /// Number of types allocated, including the built-ins.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: the built-ins are allocated up front.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the tag of a type, or `None` if `idx` is not in this pool.
    #[inline]
    pub fn tag(&self, idx: Idx) -> Option<Tag> {
        self.items.get(idx.index()).map(|item| item.tag)
    }

    /// Get the flags of a type. Unknown handles have no flags.
    #[inline]
    pub fn flags(&self, idx: Idx) -> TypeFlags {
        self.flags
            .get(idx.index())
            .copied()
            .unwrap_or_else(TypeFlags::empty)
    }

    // === Variables ===

    /// Create a fresh unbound type variable.
    ///
    /// Ids are handed out in allocation order starting from zero.
    pub fn fresh_var(&mut self) -> Idx {
        let var_id = to_u32(self.var_states.len());
        self.var_states.push(VarState::Unbound);
        let idx = self.push_item(Tag::Var, var_id, TypeFlags::HAS_VAR);
        tracing::trace!(var_id, ?idx, "fresh type variable");
        idx
    }

    /// Get the variable id of a type variable.
    #[inline]
    pub fn var_id(&self, idx: Idx) -> Option<u32> {
        match self.items.get(idx.index()) {
            Some(Item {
                tag: Tag::Var,
                data,
            }) => Some(*data),
            _ => None,
        }
    }

    /// Get the binding state of a variable by id.
    ///
    /// # Panics
    /// Panics if `var_id` was not allocated by this pool.
    #[inline]
    pub fn var_state(&self, var_id: u32) -> VarState {
        self.var_states[var_id as usize]
    }

    /// Point a variable at `target`.
    ///
    /// Used by unification to bind and by pruning to compress paths.
    #[inline]
    pub(crate) fn set_link(&mut self, var_id: u32, target: Idx) {
        self.var_states[var_id as usize] = VarState::Link { target };
    }

    /// Follow links without compressing them.
    ///
    /// For read-only queries like formatting; unification uses
    /// `UnifyEngine::prune`, which also shortens the chain.
    pub fn resolve_readonly(&self, idx: Idx) -> Idx {
        let mut current = idx;
        while let Some(var_id) = self.var_id(current) {
            match self.var_state(var_id) {
                VarState::Link { target } => current = target,
                VarState::Unbound => break,
            }
        }
        current
    }

    // === Operators ===

    /// Get the name of an operator.
    pub fn operator_name(&self, idx: Idx) -> Option<&str> {
        self.operator_name_slot(idx)
            .map(|slot| &*self.names[slot as usize])
    }

    /// Get the argument types of an operator (empty for variables).
    pub fn operator_args(&self, idx: Idx) -> SmallVec<[Idx; 2]> {
        self.operator_payload(idx)
            .map(|payload| payload[2..].iter().map(|&raw| Idx::from_raw(raw)).collect())
            .unwrap_or_default()
    }

    /// Name slot of an operator; equal slots mean equal names.
    #[inline]
    pub(crate) fn operator_name_slot(&self, idx: Idx) -> Option<u32> {
        self.operator_payload(idx).map(|payload| payload[0])
    }

    fn operator_payload(&self, idx: Idx) -> Option<&[u32]> {
        match self.items.get(idx.index()) {
            Some(Item {
                tag: Tag::Operator,
                data,
            }) => {
                let start = *data as usize;
                let arity = self.extra[start + 1] as usize;
                Some(&self.extra[start..start + 2 + arity])
            }
            _ => None,
        }
    }

    /// Allocate, or find, the operator with the given name slot and args.
    pub(crate) fn intern_operator(&mut self, name_slot: u32, args: &[Idx]) -> Idx {
        let mut payload = Vec::with_capacity(args.len() + 2);
        payload.push(name_slot);
        payload.push(to_u32(args.len()));
        payload.extend(args.iter().map(|arg| arg.raw()));

        if let Some(&existing) = self.operators.get(payload.as_slice()) {
            return existing;
        }

        let flags = TypeFlags::propagate(args.iter().map(|&arg| self.flags(arg)));

        let offset = to_u32(self.extra.len());
        self.extra.extend_from_slice(&payload);
        let idx = self.push_item(Tag::Operator, offset, flags);
        self.operators.insert(payload.into_boxed_slice(), idx);
        idx
    }

    /// Slot for an operator name, allocating one on first use.
    pub(crate) fn name_slot(&mut self, name: &str) -> u32 {
        if let Some(&slot) = self.name_lookup.get(name) {
            return slot;
        }
        let slot = to_u32(self.names.len());
        self.names.push(name.into());
        self.name_lookup.insert(name.into(), slot);
        slot
    }

    fn push_item(&mut self, tag: Tag, data: u32, flags: TypeFlags) -> Idx {
        let idx = Idx::from_raw(to_u32(self.items.len()));
        debug_assert!(!idx.is_none(), "type pool exhausted");
        self.items.push(Item { tag, data });
        self.flags.push(flags);
        idx
    }

    // === Equality ===

    /// Structural type equality.
    ///
    /// Bindings are not followed: a variable is never equal to an operator,
    /// even one it is bound to, and two variables are equal only when they
    /// are the same variable with the same binding. Operators are equal when
    /// their names, arities and arguments are. Handles outside the pool are
    /// equal only to the very same handle.
    pub fn same_type(&self, a: Idx, b: Idx) -> bool {
        if a == b {
            return true;
        }

        match (self.tag(a), self.tag(b)) {
            (Some(Tag::Var), Some(Tag::Var)) => match (self.var_id(a), self.var_id(b)) {
                (Some(id_a), Some(id_b)) => {
                    id_a == id_b && self.var_state(id_a) == self.var_state(id_b)
                }
                _ => false,
            },
            (Some(Tag::Operator), Some(Tag::Operator)) => {
                let args_a = self.operator_args(a);
                let args_b = self.operator_args(b);
                self.operator_name_slot(a) == self.operator_name_slot(b)
                    && args_a.len() == args_b.len()
                    && args_a
                        .iter()
                        .zip(&args_b)
                        .all(|(&x, &y)| self.same_type(x, y))
            }
            _ => false,
        }
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("types", &self.items.len())
            .field("vars", &self.var_states.len())
            .field("operators", &self.operators.len())
            .finish()
    }
}

/// Narrow a storage length to a 32-bit handle.
///
/// # Panics
/// Panics past `u32::MAX` entries; handles are 32 bits by construction.
#[inline]
fn to_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("type pool exceeded {} entries", u32::MAX))
}

#[cfg(test)]
mod tests;
