//! End-to-end pipeline for one variant write event.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dendrite_core::clock::Clock;
use dendrite_core::error::{PublishError, StoreError};
use dendrite_core::invalidate::CacheInvalidator;
use dendrite_core::model::Variant;
use dendrite_core::path::DocPath;
use dendrite_core::storage::ObjectStore;
use dendrite_core::store::{Document, DocumentStore};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::gate::{self, Decision};
use crate::publisher::Publisher;
use crate::resolver::ContentResolver;

/// Route parameters carried alongside a write event; they name the pending
/// marker file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteParams {
    /// Submission id for a root-page variant write.
    #[serde(default)]
    pub story_id: Option<String>,
    /// Submission id for a non-root variant write.
    #[serde(default)]
    pub variant_id: Option<String>,
}

/// One document-write event on a variant: the before and after payloads
/// plus the routing context.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantWriteEvent {
    /// Path of the variant document that was written.
    pub path: DocPath,
    /// Payload before the write; `None` for a creation.
    #[serde(default)]
    pub before: Option<serde_json::Value>,
    /// Payload after the write; `None` for a deletion.
    #[serde(default)]
    pub after: Option<serde_json::Value>,
    /// Routing context for the pending marker.
    #[serde(default)]
    pub params: RouteParams,
}

/// What one pipeline execution did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum WriteOutcome {
    /// The gate decided no render was needed.
    Skipped,
    /// The variant was rendered and published.
    #[serde(rename_all = "camelCase")]
    Rendered {
        /// Storage path of the variant page.
        variant_path: String,
        /// Storage path of the alternates page.
        alternates_path: String,
        /// Storage path of the pending marker, when written.
        pending_path: Option<String>,
        /// When the publication completed.
        rendered_at: DateTime<Utc>,
    },
}

/// The full publication pipeline: gate, resolve, render, persist,
/// invalidate, clear.
pub struct PublishPipeline {
    store: Arc<dyn DocumentStore>,
    resolver: ContentResolver,
    publisher: Publisher,
    invalidator: Arc<dyn CacheInvalidator>,
    clock: Arc<dyn Clock>,
    threshold: f64,
}

impl PublishPipeline {
    /// Assemble a pipeline over the given backends.
    #[must_use]
    pub fn new(
        store: Arc<dyn DocumentStore>,
        objects: Arc<dyn ObjectStore>,
        invalidator: Arc<dyn CacheInvalidator>,
        clock: Arc<dyn Clock>,
        threshold: f64,
    ) -> Self {
        Self {
            resolver: ContentResolver::new(Arc::clone(&store), Arc::clone(&objects), threshold),
            publisher: Publisher::new(objects),
            store,
            invalidator,
            clock,
            threshold,
        }
    }

    /// Run the pipeline for one write event.
    ///
    /// Stage order is fixed: resolution happens before rendering, rendering
    /// before persistence, persistence before invalidation, and the dirty
    /// marker is cleared last, so a failed invalidation leaves the marker in
    /// place and the event eligible for retry.
    ///
    /// # Errors
    ///
    /// Propagates store, storage, and credential failures; see the error
    /// taxonomy on [`PublishError`].
    #[instrument(skip_all, fields(variant = %event.path))]
    pub async fn handle_write(&self, event: &VariantWriteEvent) -> Result<WriteOutcome, PublishError> {
        let before = decode_snapshot(&event.path, event.before.as_ref())?;
        let after = decode_snapshot(&event.path, event.after.as_ref())?;

        let decision = gate::evaluate(before.as_ref(), after.as_ref(), self.threshold);
        let (Decision::Render { clear_dirty }, Some(variant)) = (decision, after.as_ref()) else {
            info!("write gated, skipping render");
            return Ok(WriteOutcome::Skipped);
        };

        let Some(resolved) = self.resolver.resolve(&event.path, variant).await? else {
            // A dirty mark is consumed even when nothing is renderable, so
            // an orphaned variant does not request a render forever.
            if clear_dirty {
                self.store.clear_field(&event.path, "dirty").await?;
            }
            return Ok(WriteOutcome::Skipped);
        };

        let submission_id = if variant.incoming_option.is_some() {
            event.params.variant_id.as_deref()
        } else {
            event.params.story_id.as_deref()
        };
        let artifacts = self.publisher.publish(&resolved, submission_id).await?;

        self.invalidator
            .invalidate(&artifacts.invalidation_paths)
            .await?;

        if clear_dirty {
            self.store.clear_field(&event.path, "dirty").await?;
        }

        info!(variant_path = %artifacts.variant_path, "variant published");
        Ok(WriteOutcome::Rendered {
            variant_path: artifacts.variant_path,
            alternates_path: artifacts.alternates_path,
            pending_path: artifacts.pending_path,
            rendered_at: self.clock.now(),
        })
    }
}

fn decode_snapshot(
    path: &DocPath,
    data: Option<&serde_json::Value>,
) -> Result<Option<Variant>, StoreError> {
    data.map(|data| {
        Document {
            path: path.clone(),
            data: data.clone(),
        }
        .decode()
    })
    .transpose()
}
