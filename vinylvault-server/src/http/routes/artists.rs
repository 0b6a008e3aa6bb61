//! Artist endpoints - read only

use axum::{extract::State, routing::get, Json, Router};
use vinylvault_core::Artist;

use crate::http::error::ApiError;
use crate::state::AppState;

/// GET /artists - list all artists
async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<Artist>>, ApiError> {
    let artists = state
        .catalog()
        .list_artists()
        .await
        .map_err(ApiError::database("Failed to retrieve artists"))?;

    Ok(Json(artists))
}

/// Artist routes
pub fn router() -> Router<AppState> {
    Router::new().route("/artists", get(list_artists))
}
