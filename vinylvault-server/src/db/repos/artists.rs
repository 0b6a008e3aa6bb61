//! Artist repository - read only

use sqlx::{FromRow, PgPool};
use vinylvault_core::Artist;

use super::DbError;

#[derive(Debug, FromRow)]
struct ArtistRow {
    id: String,
    name: String,
}

impl From<ArtistRow> for Artist {
    fn from(row: ArtistRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

/// Artist repository
pub struct ArtistRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtistRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All artists, unfiltered.
    pub async fn list(&self) -> Result<Vec<Artist>, DbError> {
        let rows: Vec<ArtistRow> = sqlx::query_as("SELECT id, name FROM artists")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Artist::from).collect())
    }
}
