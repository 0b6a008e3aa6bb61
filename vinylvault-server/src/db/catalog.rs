//! Catalog trait and its PostgreSQL implementation
//!
//! Handlers only see `dyn Catalog`, so the pool can be swapped for
//! [`MemoryCatalog`](super::memory::MemoryCatalog) in tests.

use async_trait::async_trait;
use sqlx::PgPool;
use vinylvault_core::{Album, Artist, Genre};

use super::repos::{AlbumRepo, ArtistRepo, DbError, GenreRepo};

/// Data access for every catalog operation (testable)
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn list_albums(&self) -> Result<Vec<Album>, DbError>;

    /// `Ok(None)` when no album has this id.
    async fn get_album(&self, id: &str) -> Result<Option<Album>, DbError>;

    async fn create_album(&self, album: &Album) -> Result<(), DbError>;

    /// Full-row update keyed by `album.id`, returns rows affected.
    async fn update_album(&self, album: &Album) -> Result<u64, DbError>;

    /// Returns rows affected.
    async fn delete_album(&self, id: &str) -> Result<u64, DbError>;

    async fn list_artists(&self) -> Result<Vec<Artist>, DbError>;

    async fn list_genres(&self) -> Result<Vec<Genre>, DbError>;
}

/// Catalog backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Catalog for PgCatalog {
    async fn list_albums(&self) -> Result<Vec<Album>, DbError> {
        AlbumRepo::new(&self.pool).list().await
    }

    async fn get_album(&self, id: &str) -> Result<Option<Album>, DbError> {
        AlbumRepo::new(&self.pool).get(id).await
    }

    async fn create_album(&self, album: &Album) -> Result<(), DbError> {
        AlbumRepo::new(&self.pool).create(album).await
    }

    async fn update_album(&self, album: &Album) -> Result<u64, DbError> {
        AlbumRepo::new(&self.pool).update(album).await
    }

    async fn delete_album(&self, id: &str) -> Result<u64, DbError> {
        AlbumRepo::new(&self.pool).delete(id).await
    }

    async fn list_artists(&self) -> Result<Vec<Artist>, DbError> {
        ArtistRepo::new(&self.pool).list().await
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, DbError> {
        GenreRepo::new(&self.pool).list().await
    }
}
