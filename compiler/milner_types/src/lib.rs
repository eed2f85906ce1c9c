//! Hindley-Milner type inference for the milner lambda calculus.
//!
//! Types live in a [`Pool`] and are named by [`Idx`] handles. Inference
//! is Algorithm W with destructive unification: a variable is bound by
//! linking its slot to another type, never by building a substitution.
//!
//! - [`UnifyEngine`]: pruning, the occurs check, unification, and
//!   instantiation (`fresh`) of implicitly polymorphic types
//! - [`InferEngine`] and [`analyse`]: the recursive walk over an
//!   expression that ties them together
//! - [`prelude`]: the standard environment of built-in names
//!
//! One pool is one inference session. After a [`TypeError`] the pool may
//! hold partial bindings; start a new pool for the next expression.

mod error;
mod flags;
mod generalize;
mod idx;
mod infer;
mod normalize;
mod pool;
pub mod prelude;
mod stack;
mod tag;
mod unify;

pub use error::{TypeError, TypeErrorKind};
pub use flags::TypeFlags;
pub use generalize::NonGeneric;
pub use idx::Idx;
pub use infer::{analyse, analyse_in, infer, InferEngine, TypeEnv};
pub use pool::{Pool, VarState};
pub use stack::ensure_sufficient_stack;
pub use tag::Tag;
pub use unify::{UnifyEngine, UnifyError};

// Handles are stored by the thousand; keep them small.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Idx, VarState};
    const _: () = assert!(std::mem::size_of::<Idx>() == 4);
    const _: () = assert!(std::mem::size_of::<VarState>() == 8);
}
