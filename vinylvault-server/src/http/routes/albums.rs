//! Album endpoints
//!
//! Update and delete answer 200 even when no row matched the id; the
//! zero-row case is only logged.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use vinylvault_core::Album;

use crate::http::error::ApiError;
use crate::http::extractors::AlbumPayload;
use crate::state::AppState;

/// Body of a successful create
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Body of a successful update or delete
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /albums - list all albums
async fn list_albums(State(state): State<AppState>) -> Result<Json<Vec<Album>>, ApiError> {
    let albums = state
        .catalog()
        .list_albums()
        .await
        .map_err(ApiError::database("Failed to retrieve albums"))?;

    Ok(Json(albums))
}

/// GET /albums/{id} - get a single album
async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Album>, ApiError> {
    let album = state
        .catalog()
        .get_album(&id)
        .await
        .map_err(ApiError::database("Failed to retrieve album"))?
        .ok_or(ApiError::NotFound {
            message: "Album not found",
        })?;

    Ok(Json(album))
}

/// POST /albums - create an album, generating its id when empty
async fn create_album(
    State(state): State<AppState>,
    AlbumPayload(mut album): AlbumPayload,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    album.ensure_id();
    if !album.condition.is_graded() {
        tracing::debug!(
            id = %album.id,
            condition = %album.condition,
            "Condition outside the grading scale"
        );
    }

    state
        .catalog()
        .create_album(&album)
        .await
        .map_err(ApiError::database("Failed to create album"))?;

    tracing::info!(id = %album.id, title = %album.title, "Album created");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: album.id })))
}

/// PUT /albums/{id} - overwrite an album; the path id wins over the body id
async fn update_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AlbumPayload(mut album): AlbumPayload,
) -> Result<Json<MessageResponse>, ApiError> {
    album.id = id;

    let affected = state
        .catalog()
        .update_album(&album)
        .await
        .map_err(ApiError::database("Failed to update album"))?;

    if affected == 0 {
        tracing::debug!(id = %album.id, "Update matched no album");
    }

    Ok(Json(MessageResponse {
        message: "Album updated successfully".to_string(),
    }))
}

/// DELETE /albums/{id} - remove an album
async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = state
        .catalog()
        .delete_album(&id)
        .await
        .map_err(ApiError::database("Failed to delete album"))?;

    if affected == 0 {
        tracing::debug!(id = %id, "Delete matched no album");
    }

    Ok(Json(MessageResponse {
        message: "Album deleted successfully".to_string(),
    }))
}

/// Album routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route(
            "/albums/{id}",
            get(get_album).put(update_album).delete(delete_album),
        )
}
