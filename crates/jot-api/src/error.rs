//! HTTP error mapping.
//!
//! Every error renders as a JSON object with an `"error"` message. Upstream
//! generation failures additionally carry the provider's payload under
//! `"details"` so clients can surface the real cause. Database and other
//! internal failures are logged server-side and collapse to a generic
//! `"Server error"` body; internals never leak to the wire.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    /// No `Authorization` header on the request.
    MissingAuth,
    /// The bearer credential did not resolve to an identity.
    InvalidToken,
    BadRequest(String),
    NotFound(String),
    /// The generation provider returned a non-success response; the payload
    /// is relayed verbatim under `"details"`.
    Upstream(serde_json::Value),
    Internal(jot_core::Error),
}

impl From<jot_core::Error> for ApiError {
    fn from(err: jot_core::Error) -> Self {
        match err {
            jot_core::Error::NoteNotFound(_) => ApiError::NotFound("Note not found".into()),
            jot_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            jot_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            jot_core::Error::Provider(details) => ApiError::Upstream(details),
            jot_core::Error::Unauthorized(_) => ApiError::InvalidToken,
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ApiError::MissingAuth => (
                StatusCode::UNAUTHORIZED,
                serde_json::json!({ "error": "Missing authorization header" }),
            ),
            ApiError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                serde_json::json!({ "error": "Invalid token" }),
            ),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, serde_json::json!({ "error": msg }))
            }
            ApiError::Upstream(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "Groq API error", "details": details }),
            ),
            ApiError::Internal(err) => {
                error!(subsystem = "api", error = %err, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": "Server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        use http_body_util::BodyExt;
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_auth_body() {
        let (status, body) = body_of(ApiError::MissingAuth).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, serde_json::json!({"error": "Missing authorization header"}));
    }

    #[tokio::test]
    async fn test_invalid_token_body() {
        let (status, body) = body_of(ApiError::InvalidToken).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, serde_json::json!({"error": "Invalid token"}));
    }

    #[tokio::test]
    async fn test_upstream_carries_details() {
        let details = serde_json::json!({"error": {"message": "rate limited"}});
        let (status, body) = body_of(ApiError::Upstream(details.clone())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Groq API error");
        assert_eq!(body["details"], details);
    }

    #[tokio::test]
    async fn test_internal_never_leaks_cause() {
        let inner = jot_core::Error::Internal("connection pool exhausted".into());
        let (status, body) = body_of(ApiError::Internal(inner)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "Server error"}));
    }

    #[tokio::test]
    async fn test_note_not_found_maps_to_404() {
        let err: ApiError = jot_core::Error::NoteNotFound(uuid::Uuid::nil()).into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": "Note not found"}));
    }
}
