//! Type construction helpers for the Pool.

use crate::{Idx, Pool};

impl Pool {
    /// Create the operator `name` applied to `args`.
    ///
    /// Arity is part of an operator's identity: `("*" a b)` and `("*" a)`
    /// never unify.
    pub fn operator(&mut self, name: &str, args: &[Idx]) -> Idx {
        let slot = self.name_slot(name);
        self.intern_operator(slot, args)
    }

    /// Create a nullary operator such as `int` or `unit`.
    pub fn nullary(&mut self, name: &str) -> Idx {
        self.operator(name, &[])
    }

    /// Create the function type `(from -> to)`.
    pub fn function(&mut self, from: Idx, to: Idx) -> Idx {
        self.operator(Self::FUNCTION, &[from, to])
    }

    /// Create the curried function type `(p0 -> (p1 -> ... ret))`.
    ///
    /// With no parameters this is `ret` itself.
    pub fn curried(&mut self, params: &[Idx], ret: Idx) -> Idx {
        params
            .iter()
            .rev()
            .fold(ret, |acc, &param| self.function(param, acc))
    }

    /// Create the product type `(a * b)`.
    pub fn product(&mut self, a: Idx, b: Idx) -> Idx {
        self.operator(Self::PRODUCT, &[a, b])
    }
}
