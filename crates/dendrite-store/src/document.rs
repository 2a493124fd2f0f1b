//! In-memory hierarchical document store.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use dendrite_core::error::StoreError;
use dendrite_core::path::DocPath;
use dendrite_core::store::{Document, DocumentStore};
use serde_json::Value;

/// Document store backed by a path-keyed map.
///
/// Listing a collection returns the documents exactly one segment below the
/// collection path; deeper descendants belong to sub-collections and are not
/// included, matching the hierarchical stores this emulates.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    docs: RwLock<BTreeMap<String, Value>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document, for seeding test and dev fixtures.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn seed(&self, path: impl Into<String>, data: Value) {
        self.docs
            .write()
            .expect("document store lock poisoned")
            .insert(path.into(), data);
    }
}

fn lock_poisoned() -> StoreError {
    StoreError::Backend("document store lock poisoned".into())
}

/// Ascending comparison of an `order_by` field across two documents.
/// Missing fields sort first; mixed types compare equal.
fn compare_field(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, path: &DocPath) -> Result<Option<Document>, StoreError> {
        let docs = self.docs.read().map_err(|_| lock_poisoned())?;
        Ok(docs.get(path.as_str()).map(|data| Document {
            path: path.clone(),
            data: data.clone(),
        }))
    }

    async fn list(
        &self,
        collection: &DocPath,
        order_by: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError> {
        let docs = self.docs.read().map_err(|_| lock_poisoned())?;
        let prefix = format!("{}/", collection.as_str());
        let mut matches: Vec<Document> = docs
            .iter()
            .filter(|(key, _)| {
                key.starts_with(&prefix) && !key[prefix.len()..].contains('/')
            })
            .map(|(key, data)| Document {
                path: DocPath::new(key.clone()),
                data: data.clone(),
            })
            .collect();

        if let Some(field) = order_by {
            matches.sort_by(|a, b| compare_field(a.data.get(field), b.data.get(field)));
        }
        if let Some(limit) = limit {
            matches.truncate(limit);
        }
        Ok(matches)
    }

    async fn set_field(
        &self,
        path: &DocPath,
        field: &str,
        value: Value,
    ) -> Result<(), StoreError> {
        let mut docs = self.docs.write().map_err(|_| lock_poisoned())?;
        let data = docs
            .get_mut(path.as_str())
            .ok_or_else(|| StoreError::Backend(format!("no document at {path}")))?;
        let object = data
            .as_object_mut()
            .ok_or_else(|| StoreError::Backend(format!("document at {path} is not an object")))?;
        object.insert(field.to_string(), value);
        Ok(())
    }

    async fn clear_field(&self, path: &DocPath, field: &str) -> Result<(), StoreError> {
        let mut docs = self.docs.write().map_err(|_| lock_poisoned())?;
        let data = docs
            .get_mut(path.as_str())
            .ok_or_else(|| StoreError::Backend(format!("no document at {path}")))?;
        let object = data
            .as_object_mut()
            .ok_or_else(|| StoreError::Backend(format!("document at {path} is not an object")))?;
        object.remove(field);
        Ok(())
    }
}
