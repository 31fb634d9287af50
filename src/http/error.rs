//! API error types with IntoResponse
//!
//! Errors are converted to the JSON envelope with appropriate status
//! codes. Storage failures are logged in full and surfaced to the caller
//! only as a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::db::DbError;
use crate::http::response::ApiResponse;
use crate::models::ValidationError;

/// API error with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400, field details)
    Validation(ValidationError),

    /// Malformed request input (400, message only)
    BadRequest(String),

    /// Referenced book does not exist (404)
    NotFound,

    /// Duplicate isbn on create or update (400)
    IsbnConflict,

    /// Storage failure (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::error_with_details("Validation failed", e.into_errors()),
            ),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, ApiResponse::error(message)),
            Self::NotFound => (StatusCode::NOT_FOUND, ApiResponse::error("Book not found")),
            Self::IsbnConflict => (
                StatusCode::BAD_REQUEST,
                ApiResponse::error("ISBN already exists"),
            ),
            Self::Database(e) => {
                // Log the actual error, return a generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::error("Internal server error"),
                )
            }
        };

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
            DbError::DuplicateIsbn => Self::IsbnConflict,
            other => Self::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), 4096).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400_with_details() {
        let err = ApiError::Validation(ValidationError::single("title", "Title is required"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Validation failed");
        assert_eq!(json["details"][0]["field"], "title");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Book not found");
    }

    #[tokio::test]
    async fn isbn_conflict_is_400() {
        let response = ApiError::IsbnConflict.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "ISBN already exists");
    }

    #[tokio::test]
    async fn duplicate_isbn_from_storage_maps_to_conflict() {
        let err = ApiError::from(DbError::DuplicateIsbn);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn database_error_hides_detail() {
        let err = ApiError::from(DbError::EmptyUpdate);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Internal server error");
    }
}
