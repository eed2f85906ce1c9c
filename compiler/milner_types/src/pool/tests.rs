use super::*;
use pretty_assertions::assert_eq;

#[test]
fn primitives_at_fixed_indices() {
    let pool = Pool::new();

    assert_eq!(pool.len(), Idx::PRIMITIVE_COUNT as usize);
    assert!(!pool.is_empty());
    for primitive in [Idx::INT, Idx::BOOL, Idx::STR] {
        assert_eq!(pool.tag(primitive), Some(Tag::Operator));
        assert_eq!(pool.operator_name(primitive), primitive.name());
        assert!(pool.operator_args(primitive).is_empty());
    }
    assert!(pool.flags(Idx::INT).is_empty());
}

#[test]
fn variables_get_sequential_ids() {
    let mut pool = Pool::new();
    let a = pool.fresh_var();
    let b = pool.fresh_var();

    assert_eq!(pool.var_id(a), Some(0));
    assert_eq!(pool.var_id(b), Some(1));
    assert_eq!(pool.var_state(0), VarState::Unbound);
    assert!(pool.flags(a).has_vars());
    assert_eq!(pool.var_id(Idx::INT), None);
}

#[test]
fn operators_are_hash_consed() {
    let mut pool = Pool::new();
    let f1 = pool.function(Idx::INT, Idx::BOOL);
    let f2 = pool.function(Idx::INT, Idx::BOOL);
    let f3 = pool.function(Idx::BOOL, Idx::INT);

    assert_eq!(f1, f2);
    assert_ne!(f1, f3);
    assert_eq!(pool.nullary("int"), Idx::INT);
}

#[test]
fn variables_are_never_shared() {
    let mut pool = Pool::new();
    let a = pool.fresh_var();
    let b = pool.fresh_var();
    assert_ne!(a, b);

    let fa = pool.function(a, a);
    let fb = pool.function(b, b);
    assert_ne!(fa, fb);
}

#[test]
fn operator_accessors() {
    let mut pool = Pool::new();
    let var = pool.fresh_var();
    let pair = pool.product(var, Idx::STR);

    assert_eq!(pool.operator_name(pair), Some("*"));
    assert_eq!(pool.operator_args(pair).as_slice(), &[var, Idx::STR]);
    assert_eq!(pool.operator_name(var), None);
    assert!(pool.operator_args(var).is_empty());
}

#[test]
fn flags_propagate_from_arguments() {
    let mut pool = Pool::new();
    let var = pool.fresh_var();
    let ground = pool.function(Idx::INT, Idx::BOOL);
    let open = pool.function(var, Idx::BOOL);
    let nested = pool.product(Idx::INT, open);

    assert_eq!(pool.flags(ground), TypeFlags::empty());
    assert_eq!(pool.flags(open), TypeFlags::HAS_VAR);
    assert!(pool.flags(nested).has_vars());
}

#[test]
fn curried_builds_right_nested_functions() {
    let mut pool = Pool::new();
    let curried = pool.curried(&[Idx::INT, Idx::BOOL], Idx::STR);
    let inner = pool.function(Idx::BOOL, Idx::STR);
    let expected = pool.function(Idx::INT, inner);

    assert_eq!(curried, expected);
    assert_eq!(pool.curried(&[], Idx::INT), Idx::INT);
}

#[test]
fn unknown_handles() {
    let pool = Pool::new();
    assert_eq!(pool.tag(Idx::NONE), None);
    assert!(pool.flags(Idx::NONE).is_empty());
}

#[test]
fn resolve_readonly_follows_links() {
    let mut pool = Pool::new();
    let a = pool.fresh_var();
    let b = pool.fresh_var();
    pool.set_link(0, b);
    pool.set_link(1, Idx::INT);

    assert_eq!(pool.resolve_readonly(a), Idx::INT);
    // No compression happened.
    assert_eq!(pool.var_state(0), VarState::Link { target: b });
}

#[test]
fn same_type_compares_operators_structurally() {
    let mut pool = Pool::new();
    let a = pool.fresh_var();
    let fa = pool.function(a, Idx::BOOL);
    let fa_again = pool.function(a, Idx::BOOL);
    let fi = pool.function(Idx::INT, Idx::BOOL);
    let pair = pool.product(Idx::INT, Idx::BOOL);

    assert!(pool.same_type(fa, fa_again));
    assert!(!pool.same_type(fa, fi));
    assert!(!pool.same_type(fi, pair));
    assert!(!pool.same_type(Idx::INT, Idx::BOOL));
    assert!(pool.same_type(Idx::NONE, Idx::NONE));
    assert!(!pool.same_type(Idx::NONE, Idx::INT));
}

#[test]
fn same_type_does_not_follow_bindings() {
    let mut pool = Pool::new();
    let a = pool.fresh_var();
    let b = pool.fresh_var();
    let fa = pool.function(a, Idx::BOOL);
    let fi = pool.function(Idx::INT, Idx::BOOL);
    pool.set_link(0, Idx::INT);
    pool.set_link(1, Idx::INT);

    // A variable and an operator are different variants.
    assert!(!pool.same_type(a, Idx::INT));
    assert!(!pool.same_type(Idx::INT, a));
    // Distinct variables stay distinct, whatever they are bound to.
    assert!(!pool.same_type(a, b));
    assert!(!pool.same_type(fa, fi));
    assert!(pool.same_type(a, a));
}
