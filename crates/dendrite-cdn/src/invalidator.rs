//! Compute URL-map cache invalidator.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dendrite_core::error::InvalidationError;
use dendrite_core::ids::IdSource;
use dendrite_core::invalidate::CacheInvalidator;
use serde::Deserialize;
use tracing::{error, instrument};

use crate::config::CdnConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Purges CDN-cached paths through the Compute `invalidateCache` API.
///
/// One bearer token is fetched per batch; a token failure aborts the batch.
/// The per-path purge requests then fan out concurrently, and each failure
/// is logged without affecting its siblings — a missed purge only means a
/// stale copy is served until the next purge or TTL expiry.
pub struct ComputeCacheInvalidator {
    client: reqwest::Client,
    config: CdnConfig,
    ids: Arc<dyn IdSource>,
}

impl ComputeCacheInvalidator {
    /// Build an invalidator with a bounded per-request timeout.
    ///
    /// # Errors
    ///
    /// Fails when the HTTP client cannot be constructed.
    pub fn new(config: CdnConfig, ids: Arc<dyn IdSource>) -> Result<Self, InvalidationError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| InvalidationError::Transport(e.to_string()))?;
        Ok(Self { client, config, ids })
    }

    async fn fetch_token(&self) -> Result<String, InvalidationError> {
        let response = self
            .client
            .get(&self.config.token_url)
            .header("Metadata-Flavor", "Google")
            .send()
            .await
            .map_err(|e| InvalidationError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(InvalidationError::Credential {
                status: response.status().as_u16(),
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| InvalidationError::Transport(e.to_string()))?;
        Ok(token.access_token)
    }

    async fn purge_path(&self, url: &str, token: &str, path: &str) {
        let body = serde_json::json!({
            "host": self.config.host,
            "path": path,
            "requestId": self.ids.next_id().to_string(),
        });

        match self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
        {
            Ok(response) if !response.status().is_success() => {
                error!(path, status = %response.status(), "cache invalidation failed");
            }
            Ok(_) => {}
            Err(err) => {
                error!(path, error = %err, "cache invalidation error");
            }
        }
    }
}

#[async_trait]
impl CacheInvalidator for ComputeCacheInvalidator {
    #[instrument(skip_all, fields(paths = paths.len()))]
    async fn invalidate(&self, paths: &[String]) -> Result<(), InvalidationError> {
        if paths.is_empty() {
            return Ok(());
        }

        let token = self.fetch_token().await?;
        let url = self.config.invalidate_url();
        futures::future::join_all(
            paths
                .iter()
                .map(|path| self.purge_path(&url, &token, path)),
        )
        .await;
        Ok(())
    }
}
