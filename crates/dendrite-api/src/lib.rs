//! Dendrite API server — HTTP surface over the publication pipeline.

pub mod error;
pub mod routes;
pub mod state;
