//! Shared application state.

use std::sync::Arc;

use dendrite_core::store::DocumentStore;
use dendrite_publish::PublishPipeline;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Document store, for the dirty-marking endpoint.
    pub store: Arc<dyn DocumentStore>,
    /// The publication pipeline.
    pub pipeline: Arc<PublishPipeline>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, pipeline: Arc<PublishPipeline>) -> Self {
        Self { store, pipeline }
    }
}
