//! Arena allocation for a single lint pass.
//!
//! Decoded identifier text, analyzer declaration payloads, and other
//! per-parse artifacts are bump-allocated and freed together when the
//! pass ends.

use bumpalo::Bump;

/// The lint arena wraps a bump allocator scoped to one
/// parse-and-analyze call.
///
/// Nothing allocated here is individually destroyed; dropping the arena
/// releases everything at once. The driver may abandon a parse mid-way
/// (e.g. an editor superseded the document) by simply dropping it.
pub struct LintArena {
    bump: Bump,
}

impl LintArena {
    /// Create a new arena with default capacity.
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Create a new arena with the specified initial capacity in bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Get a reference to the underlying bump allocator.
    #[inline]
    pub fn bump(&self) -> &Bump {
        &self.bump
    }

    /// Allocate a value in the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocate a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocate a copy of a slice in the arena.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, src: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(src)
    }

    /// Returns the total bytes allocated in this arena.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Reset the arena, deallocating all objects but keeping the memory.
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl Default for LintArena {
    fn default() -> Self {
        Self::new()
    }
}
