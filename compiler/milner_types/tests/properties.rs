//! Property-based tests for the unification engine.
//!
//! Random types are built from `int`, `bool`, `->`, `*` and three shared
//! variables, then unified in both argument orders.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use milner_types::{Idx, Pool, Tag, TypeError, TypeErrorKind, UnifyEngine, VarState};
use proptest::prelude::*;

/// Pool-independent description of a type.
#[derive(Clone, Debug)]
enum Shape {
    Int,
    Bool,
    Var(usize),
    Function(Box<Shape>, Box<Shape>),
    Product(Box<Shape>, Box<Shape>),
}

const VARS: usize = 3;

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![
        Just(Shape::Int),
        Just(Shape::Bool),
        (0..VARS).prop_map(Shape::Var),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone())
                .prop_map(|(a, b)| Shape::Function(Box::new(a), Box::new(b))),
            (inner.clone(), inner).prop_map(|(a, b)| Shape::Product(Box::new(a), Box::new(b))),
        ]
    })
}

fn build(pool: &mut Pool, vars: &[Idx], shape: &Shape) -> Idx {
    match shape {
        Shape::Int => Idx::INT,
        Shape::Bool => Idx::BOOL,
        Shape::Var(n) => vars[*n],
        Shape::Function(a, b) => {
            let a = build(pool, vars, a);
            let b = build(pool, vars, b);
            pool.function(a, b)
        }
        Shape::Product(a, b) => {
            let a = build(pool, vars, a);
            let b = build(pool, vars, b);
            pool.product(a, b)
        }
    }
}

/// Render with variables numbered by first occurrence, so two types
/// that differ only by a renaming render the same.
fn canonical(pool: &Pool, idx: Idx, seen: &mut Vec<u32>, out: &mut String) {
    let idx = pool.resolve_readonly(idx);
    if let Some(var_id) = pool.var_id(idx) {
        let ordinal = seen.iter().position(|&v| v == var_id).unwrap_or_else(|| {
            seen.push(var_id);
            seen.len() - 1
        });
        out.push_str(&format!("v{ordinal}"));
        return;
    }
    let args = pool.operator_args(idx);
    out.push('(');
    out.push_str(pool.operator_name(idx).unwrap());
    for arg in args {
        out.push(' ');
        canonical(pool, arg, seen, out);
    }
    out.push(')');
}

/// Unify the two shapes in a fresh pool, in the given order.
///
/// Returns both sides rendered together on success, so shared variables
/// between them are numbered consistently.
fn unify_outcome(left: &Shape, right: &Shape, swap: bool) -> Result<String, TypeErrorKind> {
    let mut pool = Pool::new();
    let vars: Vec<Idx> = (0..VARS).map(|_| pool.fresh_var()).collect();
    let t1 = build(&mut pool, &vars, left);
    let t2 = build(&mut pool, &vars, right);

    let mut engine = UnifyEngine::new(&mut pool);
    let result = if swap {
        engine.unify(t2, t1)
    } else {
        engine.unify(t1, t2)
    };
    result.map_err(|err| TypeError::from_unify(&err, engine.pool()).kind())?;

    let pool = engine.pool();
    assert_eq!(pool.format_type(t1), pool.format_type(t2));

    let mut seen = Vec::new();
    let mut out = String::new();
    canonical(pool, t1, &mut seen, &mut out);
    for &var in &vars {
        out.push_str(" | ");
        canonical(pool, var, &mut seen, &mut out);
    }
    Ok(out)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn unify_is_symmetric_in_outcome(left in shape_strategy(), right in shape_strategy()) {
        prop_assert_eq!(
            unify_outcome(&left, &right, false),
            unify_outcome(&right, &left, false)
        );
        prop_assert_eq!(
            unify_outcome(&left, &right, false),
            unify_outcome(&left, &right, true)
        );
    }

    #[test]
    fn prune_is_idempotent(
        shapes in prop::collection::vec(shape_strategy(), 2..6),
    ) {
        let mut pool = Pool::new();
        let vars: Vec<Idx> = (0..VARS).map(|_| pool.fresh_var()).collect();
        let types: Vec<Idx> = shapes.iter().map(|s| build(&mut pool, &vars, s)).collect();

        let mut engine = UnifyEngine::new(&mut pool);
        for pair in types.windows(2) {
            // Failures leave partial bindings behind, which is what we want
            // to prune through.
            let _ = engine.unify(pair[0], pair[1]);
        }

        for &ty in vars.iter().chain(&types) {
            let once = engine.prune(ty);
            let twice = engine.prune(once);
            prop_assert_eq!(once, twice);
            if engine.pool().tag(once) == Some(Tag::Var) {
                let var_id = engine.pool().var_id(once).unwrap();
                prop_assert_eq!(engine.pool().var_state(var_id), VarState::Unbound);
            }
        }
    }

    #[test]
    fn unify_with_self_always_succeeds(shape in shape_strategy()) {
        let mut pool = Pool::new();
        let vars: Vec<Idx> = (0..VARS).map(|_| pool.fresh_var()).collect();
        let ty = build(&mut pool, &vars, &shape);

        let mut engine = UnifyEngine::new(&mut pool);
        prop_assert_eq!(engine.unify(ty, ty), Ok(()));
        for &var in &vars {
            prop_assert_eq!(engine.prune(var), var);
        }
    }
}
