//! Stack growth for deeply nested input.
//!
//! Analysis, freshening and formatting recurse once per level of nesting,
//! so a generated expression thousands of lambdas deep would overflow a
//! fixed-size thread stack. Every such recursion goes through
//! [`ensure_sufficient_stack`], which moves onto a freshly allocated
//! segment when the current one runs low.
//!
//! On `wasm32` this is a plain call; the runtime manages its own stack.

/// Grow when less than this much stack remains (100KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// Run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
