//! Slash-separated document paths.
//!
//! Documents live in an alternating document/collection hierarchy:
//! `stories/{s}/pages/{p}/variants/{v}/options/{o}`. `DocPath` replaces the
//! chained parent references of reference-based stores with explicit
//! ancestor navigation: hopping up two segments from a document lands on
//! its parent document, one segment on its containing collection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A path to a document or collection in the hierarchical store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocPath(String);

impl DocPath {
    /// Create a path from its string form.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The raw slash-separated path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the path segments.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// The segment at `index`, if the path is that deep.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&str> {
        self.segments().nth(index)
    }

    /// The final segment (the document or collection id).
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.segments().next_back()
    }

    /// Walk up the hierarchy by `hops` segments. Returns `None` when the
    /// path is not deep enough.
    #[must_use]
    pub fn ancestor(&self, hops: usize) -> Option<Self> {
        let segments: Vec<&str> = self.segments().collect();
        if hops == 0 {
            return Some(self.clone());
        }
        if segments.len() <= hops {
            return None;
        }
        Some(Self(segments[..segments.len() - hops].join("/")))
    }

    /// The containing collection (or parent document for a collection path).
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.ancestor(1)
    }

    /// A sub-collection of this document.
    #[must_use]
    pub fn collection(&self, name: &str) -> Self {
        Self(format!("{}/{name}", self.0))
    }

    /// A child document within this collection.
    #[must_use]
    pub fn child(&self, id: &str) -> Self {
        Self(format!("{}/{id}", self.0))
    }

    /// Number of segments. Documents sit at even depths, collections at odd.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments().count()
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
