//! In-memory backends for the Dendrite publisher.
//!
//! These back the development server and the test suites. Both stores keep
//! their state behind an `RwLock`, so a single instance can be shared across
//! concurrent pipeline executions.

mod document;
mod object;

pub use document::MemoryDocumentStore;
pub use object::{MemoryObjectStore, StoredFile};
