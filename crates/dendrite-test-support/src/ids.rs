//! Test id source — sequential request identifiers for tests.

use std::sync::atomic::{AtomicU64, Ordering};

use dendrite_core::ids::IdSource;
use uuid::Uuid;

/// An id source that hands out sequential UUIDs starting from 1, so tests
/// can assert on exact request ids.
#[derive(Debug, Default)]
pub struct SequenceIds {
    next: AtomicU64,
}

impl SequenceIds {
    /// Create a source whose first id is `Uuid::from_u128(1)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequenceIds {
    fn next_id(&self) -> Uuid {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        Uuid::from_u128(u128::from(n))
    }
}
