//! Expression analysis: Algorithm W over the five node kinds.
//!
//! - `Ident`: look up and instantiate
//! - `Apply`: the function must be `arg -> result` for a fresh `result`
//! - `Lambda`: the parameter is a fresh variable pinned for the body
//! - `Let`: the value is analysed outside its own scope and stays generic
//!   in the body
//! - `Letrec`: the name is a pinned placeholder in both value and body, so
//!   a recursive binding is monomorphic throughout

use milner_ir::{ExprArena, ExprId, ExprKind};

use super::{InferEngine, TypeEnv};
use crate::stack::ensure_sufficient_stack;
use crate::{Idx, NonGeneric, TypeError};

/// Infer the type of a top-level expression.
///
/// Nothing is pinned at the top level, so every variable in `env` is
/// generic.
pub fn analyse(
    engine: &mut InferEngine<'_>,
    arena: &ExprArena,
    expr_id: ExprId,
    env: &TypeEnv,
) -> Result<Idx, TypeError> {
    analyse_in(engine, arena, expr_id, env, &NonGeneric::new())
}

/// Infer the type of an expression under an explicit non-generic set.
#[tracing::instrument(level = "trace", skip(engine, arena, env, non_generic))]
pub fn analyse_in(
    engine: &mut InferEngine<'_>,
    arena: &ExprArena,
    expr_id: ExprId,
    env: &TypeEnv,
    non_generic: &NonGeneric,
) -> Result<Idx, TypeError> {
    ensure_sufficient_stack(|| analyse_inner(engine, arena, expr_id, env, non_generic))
}

fn analyse_inner(
    engine: &mut InferEngine<'_>,
    arena: &ExprArena,
    expr_id: ExprId,
    env: &TypeEnv,
    non_generic: &NonGeneric,
) -> Result<Idx, TypeError> {
    let Some(&kind) = arena.get(expr_id) else {
        return Err(TypeError::UnhandledNode {
            node: arena.display(expr_id, engine.interner()).to_string(),
        });
    };

    match kind {
        ExprKind::Ident(name) => engine.get_type(name, env, non_generic),

        ExprKind::Apply { func, arg } => {
            let func_ty = analyse_in(engine, arena, func, env, non_generic)?;
            let arg_ty = analyse_in(engine, arena, arg, env, non_generic)?;
            let result = engine.unify().fresh_var();
            let expected = engine.unify().pool_mut().function(arg_ty, result);
            engine.unify_types(expected, func_ty)?;
            Ok(result)
        }

        ExprKind::Lambda { param, body } => {
            let param_ty = engine.unify().fresh_var();
            let body_env = env.extended(param, param_ty);
            let body_non_generic = non_generic.with(param_ty);
            let body_ty = analyse_in(engine, arena, body, &body_env, &body_non_generic)?;
            Ok(engine.unify().pool_mut().function(param_ty, body_ty))
        }

        ExprKind::Let { name, value, body } => {
            let value_ty = analyse_in(engine, arena, value, env, non_generic)?;
            let body_env = env.extended(name, value_ty);
            analyse_in(engine, arena, body, &body_env, non_generic)
        }

        ExprKind::Letrec { name, value, body } => {
            let placeholder = engine.unify().fresh_var();
            let rec_env = env.extended(name, placeholder);
            let rec_non_generic = non_generic.with(placeholder);
            let value_ty = analyse_in(engine, arena, value, &rec_env, &rec_non_generic)?;
            engine.unify_types(placeholder, value_ty)?;
            analyse_in(engine, arena, body, &rec_env, &rec_non_generic)
        }
    }
}
