//! Dendrite API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use dendrite_api::{routes, state::AppState};
use dendrite_cdn::{CdnConfig, ComputeCacheInvalidator};
use dendrite_core::VISIBILITY_THRESHOLD;
use dendrite_core::clock::{Clock, SystemClock};
use dendrite_core::ids::RandomIds;
use dendrite_core::invalidate::CacheInvalidator;
use dendrite_core::storage::ObjectStore;
use dendrite_core::store::DocumentStore;
use dendrite_publish::PublishPipeline;
use dendrite_store::{MemoryDocumentStore, MemoryObjectStore};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Dendrite API server");

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| format!("PORT must be a valid port number: {e}"))?;
    let project_id =
        std::env::var("GCP_PROJECT").map_err(|_| "GCP_PROJECT environment variable must be set")?;
    let url_map =
        std::env::var("URL_MAP").unwrap_or_else(|_| "prod-dendrite-url-map".to_string());
    let cdn_host =
        std::env::var("CDN_HOST").unwrap_or_else(|_| "www.dendritestories.co.nz".to_string());
    let threshold: f64 = match std::env::var("VISIBILITY_THRESHOLD") {
        Ok(raw) => raw
            .parse()
            .map_err(|e| format!("VISIBILITY_THRESHOLD must be a number: {e}"))?,
        Err(_) => VISIBILITY_THRESHOLD,
    };

    let mut cdn_config = CdnConfig::new(project_id, url_map, cdn_host);
    if let Ok(endpoint) = std::env::var("COMPUTE_ENDPOINT") {
        cdn_config.endpoint = endpoint;
    }
    if let Ok(token_url) = std::env::var("METADATA_TOKEN_URL") {
        cdn_config.token_url = token_url;
    }

    let store = Arc::new(MemoryDocumentStore::new());
    let objects: Arc<dyn ObjectStore> = Arc::new(MemoryObjectStore::new());
    let invalidator: Arc<dyn CacheInvalidator> =
        Arc::new(ComputeCacheInvalidator::new(cdn_config, Arc::new(RandomIds))?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let pipeline = Arc::new(PublishPipeline::new(
        Arc::clone(&store) as Arc<dyn DocumentStore>,
        objects,
        invalidator,
        clock,
        threshold,
    ));
    let app_state = AppState::new(store as Arc<dyn DocumentStore>, pipeline);

    // TODO: restrict CORS origins before exposing this beyond the edge proxy.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/variants", routes::variants::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| format!("invalid HOST/PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
