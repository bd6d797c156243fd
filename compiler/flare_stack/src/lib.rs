//! Stack safety for deep recursion.
//!
//! The parser recurses once per nesting level of statements, expressions,
//! types and XML elements. The tree depth guard bounds how deep that goes,
//! but a single level can still cost several frames, and the guard can be
//! raised by hosts. Wrapping the recursive entry points in
//! [`ensure_sufficient_stack`] grows the stack on demand instead of
//! overflowing it.
//!
//! - **Native targets**: `stacker` grows the stack when the red zone is hit.
//! - **WASM targets**: passthrough.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn parse_statement(&mut self) {
///     ensure_sufficient_stack(|| self.parse_statement_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
