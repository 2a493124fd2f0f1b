//! Cache invalidation contract.

use async_trait::async_trait;

use crate::error::InvalidationError;

/// Purges CDN-cached copies of absolute paths.
///
/// Implementations fan the per-path requests out concurrently and treat
/// individual path failures as best-effort: they are logged, not
/// propagated. Only a credential failure aborts the batch.
#[async_trait]
pub trait CacheInvalidator: Send + Sync {
    /// Invalidate every path in the batch.
    async fn invalidate(&self, paths: &[String]) -> Result<(), InvalidationError>;
}
