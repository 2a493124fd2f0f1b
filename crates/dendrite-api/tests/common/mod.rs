//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use dendrite_api::routes;
use dendrite_api::state::AppState;
use dendrite_core::VISIBILITY_THRESHOLD;
use dendrite_core::clock::Clock;
use dendrite_core::invalidate::CacheInvalidator;
use dendrite_core::storage::ObjectStore;
use dendrite_core::store::DocumentStore;
use dendrite_publish::PublishPipeline;
use dendrite_store::{MemoryDocumentStore, MemoryObjectStore};
use dendrite_test_support::{FixedClock, RecordingInvalidator};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

/// A fully wired application over in-memory backends.
pub struct TestApp {
    pub app: Router,
    pub store: Arc<MemoryDocumentStore>,
    pub objects: Arc<MemoryObjectStore>,
    pub invalidator: Arc<RecordingInvalidator>,
}

/// Builds the app with a seeded story tree.
///
/// # Panics
///
/// Panics if the fixture timestamp is invalid.
pub fn build_test_app() -> TestApp {
    let store = Arc::new(seeded_store());
    let objects = Arc::new(MemoryObjectStore::new());
    let invalidator = Arc::new(RecordingInvalidator::new());
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
    ));

    let pipeline = Arc::new(PublishPipeline::new(
        Arc::clone(&store) as Arc<dyn DocumentStore>,
        Arc::clone(&objects) as Arc<dyn ObjectStore>,
        Arc::clone(&invalidator) as Arc<dyn CacheInvalidator>,
        clock,
        VISIBILITY_THRESHOLD,
    ));
    let app_state = AppState::new(Arc::clone(&store) as Arc<dyn DocumentStore>, pipeline);

    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/variants", routes::variants::router())
        .with_state(app_state);

    TestApp {
        app,
        store,
        objects,
        invalidator,
    }
}

/// One story with a root page linking to page 5, whose variant "a" is
/// live but not yet marked dirty.
fn seeded_store() -> MemoryDocumentStore {
    let store = MemoryDocumentStore::new();
    store.seed(
        "stories/s1",
        json!({"title": "The Hollow Oak", "rootPage": "stories/s1/pages/p1"}),
    );
    store.seed("stories/s1/pages/p1", json!({"number": 1}));
    store.seed(
        "stories/s1/pages/p1/variants/v1",
        json!({"name": "a", "visibility": 0.9}),
    );
    store.seed(
        "stories/s1/pages/p1/variants/v1/options/o1",
        json!({
            "content": "Climb inside the trunk",
            "position": 1,
            "targetPage": "stories/s1/pages/p5",
        }),
    );
    store.seed(
        "stories/s1/pages/p5",
        json!({"number": 5, "incomingOption": "stories/s1/pages/p1/variants/v1/options/o1"}),
    );
    store.seed(
        "stories/s1/pages/p5/variants/v5",
        json!({
            "name": "a",
            "visibility": 0.8,
            "content": "The hollow swallows you whole.",
            "authorId": "au1",
            "authorName": "Ada",
            "incomingOption": "stories/s1/pages/p1/variants/v1/options/o1",
        }),
    );
    store.seed("authors/au1", json!({"uuid": "u-123"}));
    store
}

/// POSTs a JSON body and returns the status plus decoded response body.
///
/// # Panics
///
/// Panics if the request cannot be built or the response is not JSON.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// GETs a URI and returns the status plus decoded response body.
///
/// # Panics
///
/// Panics if the request cannot be built or the response is not JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
