//! Variant write endpoints driving the publication pipeline.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use dendrite_core::path::DocPath;
use dendrite_publish::{RouteParams, VariantWriteEvent, WriteOutcome};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /write — run the pipeline for one document-write event.
#[instrument(skip(state, event), fields(variant = %event.path))]
async fn write(
    State(state): State<AppState>,
    Json(event): Json<VariantWriteEvent>,
) -> Result<Json<WriteOutcome>, ApiError> {
    let outcome = state.pipeline.handle_write(&event).await?;
    Ok(Json(outcome))
}

/// Request body for POST /dirty.
#[derive(Debug, Deserialize)]
pub struct DirtyRequest {
    /// Path of the variant to force-render.
    pub path: DocPath,
}

/// POST /dirty — set the dirty marker on a variant and run the pipeline,
/// which re-renders unconditionally and clears the marker on success.
#[instrument(skip(state, request), fields(variant = %request.path))]
async fn dirty(
    State(state): State<AppState>,
    Json(request): Json<DirtyRequest>,
) -> Result<Json<WriteOutcome>, ApiError> {
    let Some(before) = state.store.get(&request.path).await? else {
        return Err(ApiError::VariantNotFound(request.path));
    };
    state
        .store
        .set_field(&request.path, "dirty", serde_json::Value::Bool(true))
        .await?;

    let mut after = before.data.clone();
    if let Some(map) = after.as_object_mut() {
        map.insert("dirty".to_string(), serde_json::Value::Bool(true));
    }

    info!("variant marked dirty, running pipeline");
    let event = VariantWriteEvent {
        params: route_params(&request.path),
        path: request.path,
        before: Some(before.data),
        after: Some(after),
    };
    let outcome = state.pipeline.handle_write(&event).await?;
    Ok(Json(outcome))
}

/// Submission ids derived from the document path:
/// `stories/{storyId}/pages/{p}/variants/{variantId}`.
fn route_params(path: &DocPath) -> RouteParams {
    RouteParams {
        story_id: path.segment(1).map(str::to_string),
        variant_id: path.segment(5).map(str::to_string),
    }
}

/// Returns the variants router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/write", post(write))
        .route("/dirty", post(dirty))
}
