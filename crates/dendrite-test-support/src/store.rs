//! Test store wrapper — injects failures into selected document reads.

use std::sync::Arc;

use async_trait::async_trait;
use dendrite_core::error::StoreError;
use dendrite_core::path::DocPath;
use dendrite_core::store::{Document, DocumentStore};

/// A document store that fails reads of configured paths and delegates
/// everything else to the wrapped store. Useful for exercising
/// degrade-on-failure lookups.
pub struct FailingDocumentStore {
    inner: Arc<dyn DocumentStore>,
    fail_paths: Vec<String>,
}

impl FailingDocumentStore {
    /// Wrap `inner`, failing any `get` or `list` whose path is in
    /// `fail_paths`.
    #[must_use]
    pub fn new(inner: Arc<dyn DocumentStore>, fail_paths: Vec<String>) -> Self {
        Self { inner, fail_paths }
    }

    fn should_fail(&self, path: &DocPath) -> bool {
        self.fail_paths.iter().any(|p| p == path.as_str())
    }
}

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn get(&self, path: &DocPath) -> Result<Option<Document>, StoreError> {
        if self.should_fail(path) {
            return Err(StoreError::Backend("injected read failure".into()));
        }
        self.inner.get(path).await
    }

    async fn list(
        &self,
        collection: &DocPath,
        order_by: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError> {
        if self.should_fail(collection) {
            return Err(StoreError::Backend("injected list failure".into()));
        }
        self.inner.list(collection, order_by, limit).await
    }

    async fn set_field(
        &self,
        path: &DocPath,
        field: &str,
        value: serde_json::Value,
    ) -> Result<(), StoreError> {
        self.inner.set_field(path, field, value).await
    }

    async fn clear_field(&self, path: &DocPath, field: &str) -> Result<(), StoreError> {
        self.inner.clear_field(path, field).await
    }
}
