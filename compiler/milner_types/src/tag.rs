//! Type kind discriminant.

/// What a pool entry is.
///
/// The set is closed: the calculus has exactly one kind, and every type is
/// either an inference variable or a named operator applied to arguments.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Type variable. Its binding lives in the pool's variable table.
    Var,
    /// Named type operator with zero or more arguments (`int`, `->`, `*`).
    Operator,
}
