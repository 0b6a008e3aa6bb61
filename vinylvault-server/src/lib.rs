//! vinylvault-server: HTTP server for the vinyl record catalog
//!
//! Albums, artists and genres stored in PostgreSQL, served as JSON.

pub mod db;
pub mod http;
pub mod state;

use vinylvault_core::Settings;

use crate::db::{connect_with_retry, PgCatalog, RetryPolicy};

pub use http::{build_router, ApiError, ServerError};
pub use state::AppState;

/// Connect to the database and serve until shutdown.
///
/// Fails without serving if the database stays unreachable after the
/// default retry policy (5 attempts, 3 seconds apart).
pub async fn serve(settings: &Settings) -> Result<(), ServerError> {
    let pool = connect_with_retry(
        &settings.database_url,
        settings.max_connections,
        RetryPolicy::default(),
    )
    .await?;

    let state = AppState::new(PgCatalog::new(pool));
    http::run_server(state, &settings.bind_addr()).await
}
