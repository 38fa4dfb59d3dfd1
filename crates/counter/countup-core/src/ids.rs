//! Counter identifiers.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CounterId(pub u32);

/// Monotonic allocator; ids are never reused within a board. Allocation
/// fails instead of wrapping.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// `None` once the id space is exhausted.
    #[inline]
    pub fn alloc(&mut self) -> Option<CounterId> {
        let id = CounterId(self.next);
        self.next = self.next.checked_add(1)?;
        Some(id)
    }
}
