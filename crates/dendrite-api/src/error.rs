//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dendrite_core::error::{InvalidationError, PublishError, StoreError};
use dendrite_core::path::DocPath;
use serde::Serialize;
use thiserror::Error;

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer errors for the variant endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed variant document does not exist.
    #[error("no variant at {0}")]
    VariantNotFound(DocPath),

    /// The pipeline failed.
    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Publish(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            ApiError::VariantNotFound(_) => (StatusCode::NOT_FOUND, "variant_not_found"),
            ApiError::Publish(PublishError::Invalidation(
                InvalidationError::Credential { .. } | InvalidationError::Transport(_),
            )) => (StatusCode::BAD_GATEWAY, "invalidation_error"),
            ApiError::Publish(PublishError::Store(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "store_error")
            }
            ApiError::Publish(PublishError::Storage(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "storage_error")
            }
        };

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use dendrite_core::error::StorageError;

    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_missing_variant_maps_to_404() {
        assert_eq!(
            status_of(ApiError::VariantNotFound(DocPath::new("stories/s1"))),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_credential_failure_maps_to_502() {
        let err = ApiError::Publish(PublishError::Invalidation(InvalidationError::Credential {
            status: 403,
        }));
        assert_eq!(status_of(err), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_store_failure_maps_to_500() {
        let err = ApiError::from(StoreError::Backend("down".into()));
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_failure_maps_to_500() {
        let err = ApiError::Publish(PublishError::Storage(StorageError::Backend("full".into())));
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
