//! Request-id generation abstraction.
//!
//! Each cache-invalidation request carries a fresh random id so the
//! receiving side can de-duplicate retries. Tests inject a sequenced
//! implementation.

use uuid::Uuid;

/// Source of fresh request identifiers.
pub trait IdSource: Send + Sync {
    /// Produce the next identifier.
    fn next_id(&self) -> Uuid;
}

/// Production source backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
