//! Type index handle.
//!
//! `Idx` is the only way to refer to a type. Every type, variable or
//! operator, lives in a [`Pool`](crate::Pool) and is named by its 32-bit
//! index there. Handles are `Copy`; identity comparison is an integer
//! compare.

use std::fmt;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Built-in Operators (indices 0-2) ===
    // Pre-allocated by `Pool::new` so they never need a lookup.

    /// The nullary `int` operator.
    pub const INT: Self = Self(0);
    /// The nullary `bool` operator.
    pub const BOOL: Self = Self(1);
    /// The nullary `string` operator.
    pub const STR: Self = Self(2);

    /// Number of pre-allocated built-in operators.
    pub const PRIMITIVE_COUNT: u32 = 3;

    /// Sentinel value indicating no type.
    pub const NONE: Self = Self(u32::MAX);

    /// Create an index from a raw u32 value.
    ///
    /// The result only denotes a type if some pool allocated it.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position in the pool's storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Name of a built-in operator, if this is one.
    #[inline]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("int"),
            1 => Some("bool"),
            2 => Some("string"),
            _ => None,
        }
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            write!(f, "Idx::{}", name.to_uppercase())
        } else if self.is_none() {
            write!(f, "Idx::NONE")
        } else {
            write!(f, "Idx({})", self.0)
        }
    }
}

impl Default for Idx {
    fn default() -> Self {
        Self::NONE
    }
}
