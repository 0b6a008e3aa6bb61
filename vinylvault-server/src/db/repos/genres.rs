//! Genre repository - read only

use sqlx::{FromRow, PgPool};
use vinylvault_core::Genre;

use super::DbError;

#[derive(Debug, FromRow)]
struct GenreRow {
    id: String,
    name: String,
    icon: Option<String>,
}

impl From<GenreRow> for Genre {
    fn from(row: GenreRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            icon: row.icon.unwrap_or_default(),
        }
    }
}

/// Genre repository
pub struct GenreRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> GenreRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All genres, unfiltered.
    pub async fn list(&self) -> Result<Vec<Genre>, DbError> {
        let rows: Vec<GenreRow> = sqlx::query_as("SELECT id, name, icon FROM genres")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Genre::from).collect())
    }
}
