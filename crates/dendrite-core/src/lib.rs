//! Dendrite Core — shared contracts for the variant publication pipeline.
//!
//! This crate defines the traits and types every other crate depends on:
//! the document-store and object-storage contracts, the cache-invalidator
//! seam, the typed document model, and the error taxonomy. It contains no
//! infrastructure code.

pub mod clock;
pub mod error;
pub mod ids;
pub mod invalidate;
pub mod model;
pub mod path;
pub mod storage;
pub mod store;

/// Minimum visibility score at which a variant is publicly served.
///
/// Visibility is a continuous moderation score in `[0, 1]`; publication
/// state flips when a write crosses this threshold upward.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;
