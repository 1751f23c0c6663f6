//! Stack growth for deep recursion.
//!
//! The reader recurses once per nesting level; evaluation, resumption and
//! pattern binding recurse once per nested combination. Each recursive entry
//! goes through [`ensure_sufficient_stack`], which grows the stack with
//! `stacker` when the remaining space drops below the red zone. On WASM the
//! closure is called directly.

/// Minimum stack space to keep available (128KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Stack space to allocate when growing (2MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
