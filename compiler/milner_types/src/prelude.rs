//! The standard environment.
//!
//! The calculus has no literals: numerals and booleans are ordinary
//! identifiers, so anything a program wants to use has to be bound here
//! (or by the caller) before analysis.

use milner_ir::StringInterner;

use crate::{Idx, Pool, TypeEnv};

/// Build the standard environment in `pool`.
///
/// | name | type |
/// |---|---|
/// | `pair` | `a -> b -> (a * b)` |
/// | `true`, `false` | `bool` |
/// | `cond` | `bool -> c -> c -> c` |
/// | `zero?` | `int -> bool` |
/// | `pred` | `int -> int` |
/// | `times` | `int -> int -> int` |
/// | `0` .. `9` | `int` |
///
/// In a fresh pool the three variables get ids 0 to 2, so they print as
/// `a`, `b` and `c`.
pub fn standard_env(pool: &mut Pool, interner: &StringInterner) -> TypeEnv {
    let var1 = pool.fresh_var();
    let var2 = pool.fresh_var();
    let var3 = pool.fresh_var();

    let pair_ty = pool.product(var1, var2);
    let pair = pool.curried(&[var1, var2], pair_ty);
    let cond = pool.curried(&[Idx::BOOL, var3, var3], var3);
    let zero = pool.function(Idx::INT, Idx::BOOL);
    let pred = pool.function(Idx::INT, Idx::INT);
    let times = pool.curried(&[Idx::INT, Idx::INT], Idx::INT);

    let mut env = TypeEnv::new();
    for (name, ty) in [
        ("pair", pair),
        ("true", Idx::BOOL),
        ("false", Idx::BOOL),
        ("cond", cond),
        ("zero?", zero),
        ("pred", pred),
        ("times", times),
    ] {
        env.bind(interner.intern(name), ty);
    }
    for digit in 0..10 {
        env.bind(interner.intern(&digit.to_string()), Idx::INT);
    }

    tracing::debug!(?pool, "built standard environment");
    env
}
