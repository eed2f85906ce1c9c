#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::Pool;
use pretty_assertions::assert_eq;

#[test]
fn non_generic_is_persistent() {
    let mut pool = Pool::new();
    let a = pool.fresh_var();
    let b = pool.fresh_var();

    let empty = NonGeneric::new();
    let with_a = empty.with(a);
    let with_ab = with_a.with(b);

    assert_eq!(empty.iter().count(), 0);
    assert_eq!(with_a.iter().collect::<Vec<_>>(), vec![a]);
    assert_eq!(with_ab.iter().collect::<Vec<_>>(), vec![b, a]);
}

#[test]
fn unpinned_variable_is_generic() {
    let mut pool = Pool::new();
    let a = pool.fresh_var();
    let b = pool.fresh_var();
    let mut engine = UnifyEngine::new(&mut pool);

    assert!(engine.is_generic(a, &NonGeneric::new()));
    assert!(engine.is_generic(a, &NonGeneric::new().with(b)));
    assert!(!engine.is_generic(a, &NonGeneric::new().with(a)));
}

#[test]
fn variable_reachable_from_pinned_is_not_generic() {
    let mut pool = Pool::new();
    let param = pool.fresh_var();
    let result = pool.fresh_var();
    let func = pool.function(Idx::INT, result);

    let mut engine = UnifyEngine::new(&mut pool);
    engine.unify(param, func).unwrap();

    // `result` is now part of the pinned parameter's type
    assert!(!engine.is_generic(result, &NonGeneric::new().with(param)));
}

#[test]
fn fresh_renames_generic_variables_consistently() {
    let mut pool = Pool::new();
    let a = pool.fresh_var();
    let identity = pool.function(a, a);

    let mut engine = UnifyEngine::new(&mut pool);
    let copy = engine.fresh(identity, &NonGeneric::new());

    assert_ne!(copy, identity);
    let args = engine.pool().operator_args(copy);
    assert_eq!(args[0], args[1]);
    assert_ne!(args[0], a);
    assert_eq!(engine.pool().format_type(copy), "(b -> b)");
}

#[test]
fn fresh_shares_non_generic_variables() {
    let mut pool = Pool::new();
    let a = pool.fresh_var();
    let b = pool.fresh_var();
    let pair = pool.product(a, b);

    let mut engine = UnifyEngine::new(&mut pool);
    let copy = engine.fresh(pair, &NonGeneric::new().with(a));

    let args = engine.pool().operator_args(copy);
    assert_eq!(args[0], a);
    assert_ne!(args[1], b);
}

#[test]
fn fresh_shares_ground_types() {
    let mut pool = Pool::new();
    let func = pool.function(Idx::INT, Idx::BOOL);

    let mut engine = UnifyEngine::new(&mut pool);
    assert_eq!(engine.fresh(func, &NonGeneric::new()), func);
    assert_eq!(engine.fresh(Idx::STR, &NonGeneric::new()), Idx::STR);
}

#[test]
fn fresh_copies_are_independent() {
    let mut pool = Pool::new();
    let a = pool.fresh_var();
    let identity = pool.function(a, a);

    let mut engine = UnifyEngine::new(&mut pool);
    let first = engine.fresh(identity, &NonGeneric::new());
    let second = engine.fresh(identity, &NonGeneric::new());

    let int_fn = engine.pool_mut().function(Idx::INT, Idx::INT);
    let bool_fn = engine.pool_mut().function(Idx::BOOL, Idx::BOOL);
    engine.unify(first, int_fn).unwrap();
    engine.unify(second, bool_fn).unwrap();

    assert_eq!(engine.pool().format_type(first), "(int -> int)");
    assert_eq!(engine.pool().format_type(second), "(bool -> bool)");
    assert_eq!(engine.pool().format_type(identity), "(a -> a)");
}

#[test]
fn fresh_reads_through_bindings() {
    let mut pool = Pool::new();
    let a = pool.fresh_var();
    let b = pool.fresh_var();
    let func = pool.function(a, b);

    let mut engine = UnifyEngine::new(&mut pool);
    engine.unify(a, Idx::INT).unwrap();
    let copy = engine.fresh(func, &NonGeneric::new());

    assert_eq!(engine.pool().format_type(copy), "(int -> c)");
}
