//! Error taxonomy for the publication pipeline.
//!
//! Three layers of failure exist: document-store errors, object-storage
//! errors, and cache-invalidation errors. `PublishError` is the top-level
//! type returned by the pipeline; lookup failures that merely remove an
//! optional feature from the rendered page never surface here — they are
//! logged at the site of the lookup and degrade to `None`.

use thiserror::Error;

use crate::path::DocPath;

/// Failures reading from or writing to the hierarchical document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store rejected or failed the operation.
    #[error("document store error: {0}")]
    Backend(String),

    /// A document was fetched but its payload did not match the expected
    /// shape.
    #[error("document decode error at {path}: {message}")]
    Decode {
        /// Path of the offending document.
        path: DocPath,
        /// Decoder diagnostic.
        message: String,
    },
}

/// Failures writing to or probing the object storage bucket.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The bucket backend rejected or failed the operation.
    #[error("object storage error: {0}")]
    Backend(String),
}

/// Failures invalidating CDN-cached paths.
#[derive(Debug, Error)]
pub enum InvalidationError {
    /// The credential endpoint refused to issue a bearer token. This is a
    /// hard failure: the whole invalidation batch is aborted.
    #[error("credential fetch failed with status {status}")]
    Credential {
        /// HTTP status returned by the credential endpoint.
        status: u16,
    },

    /// The credential endpoint could not be reached at all.
    #[error("credential fetch failed: {0}")]
    Transport(String),
}

/// Top-level error for one pipeline execution.
#[derive(Debug, Error)]
pub enum PublishError {
    /// A required document read or the dirty-flag clear failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Writing a rendered artifact failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The invalidation batch failed outright (credential fetch).
    #[error(transparent)]
    Invalidation(#[from] InvalidationError),
}
