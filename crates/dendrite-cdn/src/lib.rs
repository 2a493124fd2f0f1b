//! Dendrite CDN — cache invalidation against the Compute URL-map API.
//!
//! A published artifact may be cached at the edge; after every publication
//! the affected paths are purged. The bearer token comes from the instance
//! metadata service, and the per-path purge requests fan out concurrently.

mod config;
mod invalidator;

pub use config::CdnConfig;
pub use invalidator::ComputeCacheInvalidator;
