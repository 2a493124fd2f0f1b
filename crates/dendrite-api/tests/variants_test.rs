//! Integration tests for the variant write endpoints.

mod common;

use axum::http::StatusCode;
use dendrite_core::path::DocPath;
use dendrite_core::store::DocumentStore;
use serde_json::json;

use common::{build_test_app, post_json};

const VARIANT_PATH: &str = "stories/s1/pages/p5/variants/v5";

#[tokio::test]
async fn test_write_event_publishes_and_reports_artifacts() {
    let test_app = build_test_app();
    let body = json!({
        "path": VARIANT_PATH,
        "before": {"name": "a", "visibility": 0.8},
        "after": {
            "name": "a",
            "visibility": 0.8,
            "content": "The hollow swallows you whole.",
            "authorId": "au1",
            "authorName": "Ada",
            "incomingOption": "stories/s1/pages/p1/variants/v1/options/o1",
            "dirty": true,
        },
        "params": {"variantId": "v5"},
    });

    let (status, response) = post_json(test_app.app, "/api/v1/variants/write", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["outcome"], "rendered");
    assert_eq!(response["variantPath"], "p/5a.html");
    assert_eq!(response["alternatesPath"], "p/5-alts.html");
    assert_eq!(response["pendingPath"], "pending/v5.json");
    assert_eq!(response["renderedAt"], "2026-01-15T10:00:00Z");

    let page = test_app.objects.file("p/5a.html").unwrap();
    assert!(page.content.contains("The hollow swallows you whole."));
    assert_eq!(
        test_app.invalidator.batches(),
        vec![vec![
            "/p/5-alts.html".to_string(),
            "/p/5a.html".to_string(),
            "/p/1a.html".to_string(),
        ]]
    );
}

#[tokio::test]
async fn test_gated_write_reports_skipped() {
    let test_app = build_test_app();
    let body = json!({
        "path": VARIANT_PATH,
        "before": {"name": "a", "visibility": 0.6},
        "after": {"name": "a", "visibility": 0.3},
    });

    let (status, response) = post_json(test_app.app, "/api/v1/variants/write", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, json!({"outcome": "skipped"}));
    assert!(test_app.objects.paths().is_empty());
}

#[tokio::test]
async fn test_dirty_endpoint_republishes_and_clears_marker() {
    let test_app = build_test_app();
    let body = json!({"path": VARIANT_PATH});

    let (status, response) = post_json(test_app.app, "/api/v1/variants/dirty", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["outcome"], "rendered");
    // Submission ids come from the document path.
    assert_eq!(response["pendingPath"], "pending/v5.json");
    assert!(test_app.objects.file("p/5a.html").is_some());

    // The marker was set for the pipeline run and cleared on success.
    let doc = test_app
        .store
        .get(&DocPath::new(VARIANT_PATH))
        .await
        .unwrap()
        .unwrap();
    assert!(doc.data.get("dirty").is_none());
}

#[tokio::test]
async fn test_dirty_endpoint_rejects_unknown_variant() {
    let test_app = build_test_app();
    let body = json!({"path": "stories/s1/pages/p5/variants/nope"});

    let (status, response) = post_json(test_app.app, "/api/v1/variants/dirty", &body).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["error"], "variant_not_found");
    assert!(test_app.objects.paths().is_empty());
}
