//! Dendrite Render — pure HTML rendering.
//!
//! Everything in this crate is a pure function of its inputs: rendering the
//! same resolved content twice yields byte-identical output, which is what
//! makes re-publishing a variant idempotent.

pub mod alternates;
pub mod author;
pub mod choice;
mod chrome;
pub mod escape;
pub mod inline;
mod model;
pub mod page;
mod script;

pub use model::{PageContext, ResolvedOption, ResolvedTarget, VariantSummary, WeightedVariant};
