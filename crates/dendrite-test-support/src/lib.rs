//! Shared test mocks and utilities for the Dendrite publisher.

mod clock;
mod ids;
mod invalidator;
mod store;

pub use clock::FixedClock;
pub use ids::SequenceIds;
pub use invalidator::{FailingInvalidator, RecordingInvalidator};
pub use store::FailingDocumentStore;
