//! API error types with IntoResponse
//!
//! Every error becomes an `ErrorResponse` body with a fixed, user-facing
//! message. Database details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use vinylvault_core::ErrorResponse;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be bound (400)
    BadRequest { message: &'static str },

    /// Single-record lookup found nothing (404)
    NotFound { message: &'static str },

    /// Database error (500, logged)
    Database {
        message: &'static str,
        source: DbError,
    },
}

impl ApiError {
    /// Map a data-access failure to a 500 carrying `message`.
    ///
    /// ```ignore
    /// catalog.list_albums().await.map_err(ApiError::database("Failed to retrieve albums"))?;
    /// ```
    pub fn database(message: &'static str) -> impl FnOnce(DbError) -> Self {
        move |source| Self::Database { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { message }
            | Self::NotFound { message }
            | Self::Database { message, .. } => *message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Database { message, source } = &self {
            // Log the actual error, return the generic message
            tracing::error!(error = %source, "{}", message);
        }

        (self.status(), Json(ErrorResponse::new(self.message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn bad_request_is_400() {
        let response = ApiError::BadRequest {
            message: "Invalid album data",
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await.error, "Invalid album data");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::NotFound {
            message: "Album not found",
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn database_error_hides_driver_detail() {
        let err = ApiError::database("Failed to retrieve albums")(DbError::Sqlx(
            sqlx::Error::Protocol("relation \"albums\" does not exist".into()),
        ));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body.error, "Failed to retrieve albums");
    }
}
