//! Artifact publication to object storage.

use std::sync::Arc;

use dendrite_core::error::PublishError;
use dendrite_core::storage::{FileMetadata, ObjectStore};
use tracing::{instrument, warn};

use crate::resolver::ResolvedContent;

/// Paths produced by one publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Storage path of the variant page.
    pub variant_path: String,
    /// Storage path of the alternates page.
    pub alternates_path: String,
    /// Storage path of the pending marker, when a submission id was known.
    pub pending_path: Option<String>,
    /// Absolute CDN paths to purge, in write order: alternates, variant,
    /// then the parent page when one exists.
    pub invalidation_paths: Vec<String>,
}

/// Renders resolved content and writes the artifacts.
pub struct Publisher {
    objects: Arc<dyn ObjectStore>,
}

impl Publisher {
    /// Create a publisher over the given bucket.
    #[must_use]
    pub fn new(objects: Arc<dyn ObjectStore>) -> Self {
        Self { objects }
    }

    /// Write the variant page, the alternates page, and the pending marker.
    ///
    /// All three writes are unconditional overwrites, which is what makes
    /// re-publication idempotent.
    ///
    /// # Errors
    ///
    /// Any storage write failure aborts the publication.
    #[instrument(skip_all, fields(page = content.context.page_number, variant = %content.context.variant_name))]
    pub async fn publish(
        &self,
        content: &ResolvedContent,
        submission_id: Option<&str>,
    ) -> Result<Artifacts, PublishError> {
        let page_number = content.context.page_number;

        let variant_path = format!("p/{page_number}{}.html", content.context.variant_name);
        let html = dendrite_render::page::variant_page(&content.context);
        let metadata = if content.has_open_option {
            // The option list of an open variant changes as soon as someone
            // writes the continuation, so its page must not be cached.
            FileMetadata::html_no_store()
        } else {
            FileMetadata::html()
        };
        self.objects.write(&variant_path, &html, &metadata).await?;

        let alternates_path = format!("p/{page_number}-alts.html");
        let alts_html = dendrite_render::alternates::alternates_page(page_number, &content.siblings);
        self.objects
            .write(&alternates_path, &alts_html, &FileMetadata::html())
            .await?;

        let pending_path = match submission_id {
            Some(id) => {
                let path = format!("pending/{id}.json");
                let body = serde_json::json!({ "path": variant_path }).to_string();
                self.objects
                    .write(&path, &body, &FileMetadata::json_no_store())
                    .await?;
                Some(path)
            }
            None => {
                warn!("no submission id for this write, skipping pending marker");
                None
            }
        };

        let mut invalidation_paths = vec![format!("/{alternates_path}"), format!("/{variant_path}")];
        if let Some(parent_url) = &content.context.parent_url {
            invalidation_paths.push(parent_url.clone());
        }

        Ok(Artifacts {
            variant_path,
            alternates_path,
            pending_path,
            invalidation_paths,
        })
    }
}
