//! Object storage ("bucket") contract.

use async_trait::async_trait;

use crate::error::StorageError;

/// Content type and cache policy attached to a stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMetadata {
    /// MIME type served with the file.
    pub content_type: &'static str,
    /// Optional `cache-control` override; `None` means default caching.
    pub cache_control: Option<&'static str>,
}

impl FileMetadata {
    /// Normally cached HTML.
    #[must_use]
    pub const fn html() -> Self {
        Self {
            content_type: "text/html",
            cache_control: None,
        }
    }

    /// HTML whose content may still change (open variants).
    #[must_use]
    pub const fn html_no_store() -> Self {
        Self {
            content_type: "text/html",
            cache_control: Some("no-store"),
        }
    }

    /// Hand-off JSON that must never be cached.
    #[must_use]
    pub const fn json_no_store() -> Self {
        Self {
            content_type: "application/json",
            cache_control: Some("no-store"),
        }
    }
}

/// Path-addressed file writes and existence checks against a bucket.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write (unconditionally overwriting) a file at `path`.
    async fn write(
        &self,
        path: &str,
        content: &str,
        metadata: &FileMetadata,
    ) -> Result<(), StorageError>;

    /// Whether a file already exists at `path`.
    async fn exists(&self, path: &str) -> Result<bool, StorageError>;
}
