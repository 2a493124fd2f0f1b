//! In-memory object storage bucket.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use dendrite_core::error::StorageError;
use dendrite_core::storage::{FileMetadata, ObjectStore};

/// A file as written into the in-memory bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// File body.
    pub content: String,
    /// MIME type recorded at write time.
    pub content_type: &'static str,
    /// Cache policy recorded at write time.
    pub cache_control: Option<&'static str>,
}

/// Object store backed by a path-keyed map.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    files: RwLock<BTreeMap<String, StoredFile>>,
}

impl MemoryObjectStore {
    /// Create an empty bucket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored file at `path`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn file(&self, path: &str) -> Option<StoredFile> {
        self.files
            .read()
            .expect("object store lock poisoned")
            .get(path)
            .cloned()
    }

    /// Every stored path, in lexicographic order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.files
            .read()
            .expect("object store lock poisoned")
            .keys()
            .cloned()
            .collect()
    }
}

fn lock_poisoned() -> StorageError {
    StorageError::Backend("object store lock poisoned".into())
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn write(
        &self,
        path: &str,
        content: &str,
        metadata: &FileMetadata,
    ) -> Result<(), StorageError> {
        let mut files = self.files.write().map_err(|_| lock_poisoned())?;
        files.insert(
            path.to_string(),
            StoredFile {
                content: content.to_string(),
                content_type: metadata.content_type,
                cache_control: metadata.cache_control,
            },
        );
        Ok(())
    }

    async fn exists(&self, path: &str) -> Result<bool, StorageError> {
        let files = self.files.read().map_err(|_| lock_poisoned())?;
        Ok(files.contains_key(path))
    }
}
