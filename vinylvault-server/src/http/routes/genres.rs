//! Genre endpoints - read only

use axum::{extract::State, routing::get, Json, Router};
use vinylvault_core::Genre;

use crate::http::error::ApiError;
use crate::state::AppState;

/// GET /genres - list all genres
async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>, ApiError> {
    let genres = state
        .catalog()
        .list_genres()
        .await
        .map_err(ApiError::database("Failed to retrieve genres"))?;

    Ok(Json(genres))
}

/// Genre routes
pub fn router() -> Router<AppState> {
    Router::new().route("/genres", get(list_genres))
}
