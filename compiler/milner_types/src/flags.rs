//! Pre-computed type metadata flags.
//!
//! `TypeFlags` are computed once when a type is allocated, so property
//! queries never have to walk the type.

use bitflags::bitflags;

bitflags! {
    /// Pre-computed type properties.
    ///
    /// Used to gate traversals: a type without `HAS_VAR` can skip the
    /// occurs check and is shared as-is by `fresh`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u8 {
        /// Is, or was built from, a type variable.
        ///
        /// Conservative: stays set after the variable is bound.
        const HAS_VAR = 1 << 0;
    }
}

impl TypeFlags {
    /// Flags that propagate from argument types to the operator holding them.
    pub const PROPAGATE_MASK: Self = Self::HAS_VAR;

    /// Check if the type may contain variables.
    #[inline]
    pub const fn has_vars(self) -> bool {
        self.contains(Self::HAS_VAR)
    }

    /// Flags inherited from the given argument flags.
    #[inline]
    pub fn propagate(args: impl IntoIterator<Item = TypeFlags>) -> Self {
        args.into_iter()
            .fold(Self::empty(), |acc, flags| acc | flags)
            .intersection(Self::PROPAGATE_MASK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_variable_argument_marks_the_operator() {
        let inherited = TypeFlags::propagate([TypeFlags::empty(), TypeFlags::HAS_VAR]);
        assert_eq!(inherited, TypeFlags::HAS_VAR);
        assert!(inherited.has_vars());
    }

    #[test]
    fn ground_arguments_propagate_nothing() {
        let inherited = TypeFlags::propagate([TypeFlags::empty(), TypeFlags::empty()]);
        assert!(inherited.is_empty());
        assert!(!TypeFlags::propagate([]).has_vars());
    }
}
