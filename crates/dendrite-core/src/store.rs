//! Hierarchical document store contract.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::path::DocPath;

/// A document snapshot: its path plus the raw stored payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Where the document lives.
    pub path: DocPath,
    /// Raw payload as stored.
    pub data: serde_json::Value,
}

impl Document {
    /// Decode the payload into a typed model.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Decode` when the payload does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        serde_json::from_value(self.data.clone()).map_err(|e| StoreError::Decode {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

/// Read and field-write operations over the hierarchical document store.
///
/// Writes are limited to single-field set/clear: the pipeline only ever
/// flips the `dirty` marker, and the store's per-document write atomicity
/// guarantees concurrent writes to other fields survive the clear.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a single document; `Ok(None)` when it does not exist.
    async fn get(&self, path: &DocPath) -> Result<Option<Document>, StoreError>;

    /// List the documents of a collection, optionally ordered by a field
    /// (ascending) and truncated to `limit`.
    async fn list(
        &self,
        collection: &DocPath,
        order_by: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError>;

    /// Set one field of an existing document, leaving the rest untouched.
    async fn set_field(
        &self,
        path: &DocPath,
        field: &str,
        value: serde_json::Value,
    ) -> Result<(), StoreError>;

    /// Remove one field from a document. This is the field-delete sentinel
    /// of reference stores: the field ends up absent, not `null`.
    async fn clear_field(&self, path: &DocPath, field: &str) -> Result<(), StoreError>;
}
