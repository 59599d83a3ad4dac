// crates/core/src/supersede.rs
//! Cancel-or-supersede guard for dependent fetches.
//!
//! District lookups are triggered by the most recently selected province. A
//! slow response for an earlier selection must not overwrite data for a
//! newer one, so every dependent fetch is tagged at start and the tag is
//! checked before its result is applied. Uses a lock-free atomic generation
//! counter; tags are cheap `Copy` values safe to carry across awaits.

use std::sync::atomic::{AtomicU64, Ordering};

/// The generation token handed out when a dependent fetch begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTag(u64);

/// Tracks which selection is current.
///
/// `begin` supersedes all outstanding tags; `commit` tells a finished fetch
/// whether its result may still be applied.
#[derive(Debug, Default)]
pub struct SupersedeGuard {
    generation: AtomicU64,
}

impl SupersedeGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new selection and tag the fetch it triggers. Any tag from
    /// an earlier `begin` is superseded from this point on.
    pub fn begin(&self) -> SelectionTag {
        SelectionTag(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a finished fetch's result is still for the current selection.
    /// Returns `false` for a stale tag; the caller discards the result.
    pub fn commit(&self, tag: SelectionTag) -> bool {
        self.generation.load(Ordering::SeqCst) == tag.0
    }
}
