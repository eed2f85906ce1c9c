//! Intermediate representation for the milner type checker.
//!
//! The inference engine reads this representation but never writes it:
//! - `Name`: interned identifiers
//! - `ExprArena`: the flat expression tree, addressed by `ExprId`
//!
//! Building the tree (parsing, surface syntax) is the caller's job; the
//! arena only offers constructors for the five node kinds.

mod expr;
mod interner;
mod name;

pub use expr::{ExprArena, ExprDisplay, ExprId, ExprKind};
pub use interner::StringInterner;
pub use name::Name;
