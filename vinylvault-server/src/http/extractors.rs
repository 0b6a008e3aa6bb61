//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use vinylvault_core::Album;

use super::error::ApiError;

/// Album bound from a JSON request body.
///
/// The body is decoded as JSON whatever the `Content-Type` header says. Any
/// failure (unreadable body, syntax, wrong types) becomes a 400 with a fixed
/// message; the parser detail is only logged.
pub struct AlbumPayload(pub Album);

impl<S> FromRequest<S> for AlbumPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(reason = %rejection.body_text(), "Unreadable album payload");
            invalid_album()
        })?;

        let album = serde_json::from_slice::<Album>(&bytes).map_err(|err| {
            tracing::debug!(error = %err, "Rejected album payload");
            invalid_album()
        })?;

        Ok(Self(album))
    }
}

fn invalid_album() -> ApiError {
    ApiError::BadRequest {
        message: "Invalid album data",
    }
}
