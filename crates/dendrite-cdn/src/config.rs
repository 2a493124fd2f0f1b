//! Invalidation endpoint configuration.

/// Compute endpoint used outside of tests.
pub const DEFAULT_COMPUTE_ENDPOINT: &str = "https://compute.googleapis.com/compute/v1";

/// Instance metadata URL that issues service-account tokens.
pub const DEFAULT_METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

/// Where and how to issue cache invalidation requests.
#[derive(Debug, Clone)]
pub struct CdnConfig {
    /// Cloud project owning the URL map.
    pub project_id: String,
    /// Name of the URL map fronting the bucket.
    pub url_map: String,
    /// Host whose cached entries are purged.
    pub host: String,
    /// Base URL of the Compute API; overridable for tests.
    pub endpoint: String,
    /// URL of the token-issuing metadata endpoint; overridable for tests.
    pub token_url: String,
}

impl CdnConfig {
    /// Configuration against the production Compute API.
    #[must_use]
    pub fn new(
        project_id: impl Into<String>,
        url_map: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            url_map: url_map.into(),
            host: host.into(),
            endpoint: DEFAULT_COMPUTE_ENDPOINT.to_string(),
            token_url: DEFAULT_METADATA_TOKEN_URL.to_string(),
        }
    }

    /// The `invalidateCache` URL for this project and URL map.
    #[must_use]
    pub fn invalidate_url(&self) -> String {
        format!(
            "{}/projects/{}/global/urlMaps/{}/invalidateCache",
            self.endpoint, self.project_id, self.url_map
        )
    }
}
