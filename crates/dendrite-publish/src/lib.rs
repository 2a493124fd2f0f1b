//! Dendrite Publish — the variant publication pipeline.
//!
//! One pipeline execution corresponds to one qualifying document-write
//! event: the gate decides whether to render at all, the resolver walks the
//! story tree to assemble a render model, the publisher persists the
//! rendered artifacts, and finally the CDN cache is purged and any dirty
//! marker cleared.

pub mod gate;
pub mod pipeline;
pub mod publisher;
pub mod resolver;

pub use pipeline::{PublishPipeline, RouteParams, VariantWriteEvent, WriteOutcome};
pub use resolver::{ContentResolver, ResolvedContent};
