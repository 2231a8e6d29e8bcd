//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes:
//! `{"success": false, "error": <status>, "message": ..., "detail": ...}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request input failed validation (422)
    Validation(ValidationError),

    /// Request is well-formed HTTP but cannot be acted on (422)
    Unprocessable { reason: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Known route, unsupported method (405)
    MethodNotAllowed { method: String, path: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn unprocessable(reason: impl Into<String>) -> Self {
        Self::Unprocessable {
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, detail) = match &self {
            Self::Validation(e) => ("Unprocessable", Some(e.to_string())),
            Self::Unprocessable { reason } => ("Unprocessable", Some(reason.clone())),
            Self::NotFound { resource, id } => {
                ("Not found", Some(format!("{} '{}' not found", resource, id)))
            }
            Self::MethodNotAllowed { method, path } => (
                "Method not allowed",
                Some(format!("{} is not supported on {}", method, path)),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                ("Internal server error", None)
            }
        };

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
            "detail": detail,
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::InvalidReference { .. } => Self::Unprocessable {
                reason: e.to_string(),
            },
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let (status, body) = body_json(ApiError::Validation(ValidationError::Empty {
            field: "question",
        }))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 422);
        assert_eq!(body["message"], "Unprocessable");
        assert_eq!(body["detail"], "question cannot be empty");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let (status, body) = body_json(ApiError::NotFound {
            resource: "page",
            id: "4".into(),
        })
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "Not found");
    }

    #[tokio::test]
    async fn method_not_allowed_is_405() {
        let (status, body) = body_json(ApiError::MethodNotAllowed {
            method: "GET".into(),
            path: "/quizzes".into(),
        })
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 405);
        assert_eq!(body["message"], "Method not allowed");
        assert_eq!(body["detail"], "GET is not supported on /quizzes");
    }

    #[tokio::test]
    async fn database_error_hides_detail() {
        let (status, body) = body_json(ApiError::Database(DbError::Sqlx(
            sqlx::Error::PoolTimedOut,
        )))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");
        assert!(body["detail"].is_null());
    }

    #[test]
    fn invalid_reference_is_unprocessable() {
        let err = ApiError::from(DbError::InvalidReference {
            field: "category",
            value: "42".into(),
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
