//! Test invalidators — mock `CacheInvalidator` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use dendrite_core::error::InvalidationError;
use dendrite_core::invalidate::CacheInvalidator;

/// A cache invalidator that records every batch it is asked to purge and
/// always succeeds.
#[derive(Debug, Default)]
pub struct RecordingInvalidator {
    batches: Mutex<Vec<Vec<String>>>,
}

impl RecordingInvalidator {
    /// Create a new recording invalidator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded batches in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl CacheInvalidator for RecordingInvalidator {
    async fn invalidate(&self, paths: &[String]) -> Result<(), InvalidationError> {
        self.batches.lock().unwrap().push(paths.to_vec());
        Ok(())
    }
}

/// A cache invalidator that always fails with a credential error. Useful for
/// testing the hard-failure path of the pipeline.
#[derive(Debug)]
pub struct FailingInvalidator;

#[async_trait]
impl CacheInvalidator for FailingInvalidator {
    async fn invalidate(&self, _paths: &[String]) -> Result<(), InvalidationError> {
        Err(InvalidationError::Credential { status: 403 })
    }
}
