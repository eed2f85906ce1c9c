//! Type errors.
//!
//! Every failure aborts the inference call that raised it. Types in a
//! [`TypeError`] are already rendered to strings, so the error stays
//! readable after the pool that produced it is dropped.

use thiserror::Error;

use crate::{Pool, UnifyError};

/// Error from type inference.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TypeError {
    /// An identifier with no binding in the environment.
    #[error("Undefined symbol {name}")]
    UndefinedSymbol { name: String },

    /// Two operators with different names or arities.
    #[error("Type mismatch: {left} != {right}")]
    TypeMismatch { left: String, right: String },

    /// A variable would have to contain itself.
    #[error("Recursive unification")]
    RecursiveUnification,

    /// A handle that does not denote a type reached unification.
    #[error("Can not unify: {left}, {right}")]
    CannotUnify { left: String, right: String },

    /// An expression the analyser cannot take apart.
    #[error("Unhandled syntax node {node}")]
    UnhandledNode { node: String },
}

/// Discriminant of a [`TypeError`], for matching without the payload.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeErrorKind {
    /// See [`TypeError::UndefinedSymbol`].
    UndefinedSymbol,
    /// See [`TypeError::TypeMismatch`].
    TypeMismatch,
    /// See [`TypeError::RecursiveUnification`].
    RecursiveUnification,
    /// See [`TypeError::CannotUnify`].
    CannotUnify,
    /// See [`TypeError::UnhandledNode`].
    UnhandledNode,
}

impl TypeError {
    /// Render a unification failure against the pool it came from.
    pub fn from_unify(err: &UnifyError, pool: &Pool) -> Self {
        match *err {
            UnifyError::Mismatch { left, right } => TypeError::TypeMismatch {
                left: pool.format_type(left),
                right: pool.format_type(right),
            },
            UnifyError::InfiniteType { .. } => TypeError::RecursiveUnification,
            UnifyError::CannotUnify { left, right } => TypeError::CannotUnify {
                left: pool.format_type(left),
                right: pool.format_type(right),
            },
        }
    }

    /// The kind of this error.
    pub fn kind(&self) -> TypeErrorKind {
        match self {
            TypeError::UndefinedSymbol { .. } => TypeErrorKind::UndefinedSymbol,
            TypeError::TypeMismatch { .. } => TypeErrorKind::TypeMismatch,
            TypeError::RecursiveUnification => TypeErrorKind::RecursiveUnification,
            TypeError::CannotUnify { .. } => TypeErrorKind::CannotUnify,
            TypeError::UnhandledNode { .. } => TypeErrorKind::UnhandledNode,
        }
    }
}
