//! In-memory catalog for tests and local experiments
//!
//! Behaves like the PostgreSQL tables it stands in for: primary-key and
//! foreign-key checks on writes, inner-join semantics on album reads,
//! insertion order for listings. Every call is counted, and failures can be
//! injected to exercise the 500 paths.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use vinylvault_core::{Album, Artist, Genre};

use super::catalog::Catalog;
use super::repos::DbError;

#[derive(Debug, Default)]
struct Tables {
    albums: Vec<Album>,
    artists: Vec<Artist>,
    genres: Vec<Genre>,
}

impl Tables {
    /// Join an album row with its artist and genre, `None` if either dangles
    fn joined(&self, album: &Album) -> Option<Album> {
        let artist = self.artists.iter().find(|a| a.id == album.artist_id)?;
        let genre = self.genres.iter().find(|g| g.id == album.genre_id)?;

        Some(Album {
            artist: Some(artist.clone()),
            genre: Some(genre.clone()),
            ..album.clone()
        })
    }

    fn check_references(&self, album: &Album) -> Result<(), DbError> {
        if !self.artists.iter().any(|a| a.id == album.artist_id) {
            return Err(constraint_violation(format!(
                "albums.artist_id '{}' references no artist",
                album.artist_id
            )));
        }
        if !self.genres.iter().any(|g| g.id == album.genre_id) {
            return Err(constraint_violation(format!(
                "albums.genre_id '{}' references no genre",
                album.genre_id
            )));
        }
        Ok(())
    }
}

fn constraint_violation(message: String) -> DbError {
    DbError::Sqlx(sqlx::Error::Protocol(message))
}

/// Store album rows without embedded records, as the table would
fn stored(album: &Album) -> Album {
    Album {
        artist: None,
        genre: None,
        ..album.clone()
    }
}

/// Mock catalog for testing
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    tables: RwLock<Tables>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with one artist (`art-001`) and one genre (`gen-001`)
    pub fn seeded() -> Self {
        Self::new()
            .with_artist(Artist {
                id: "art-001".into(),
                name: "Pink Floyd".into(),
            })
            .with_genre(Genre {
                id: "gen-001".into(),
                name: "Rock".into(),
                icon: "🎸".into(),
            })
    }

    pub fn with_artist(mut self, artist: Artist) -> Self {
        self.tables.get_mut().artists.push(artist);
        self
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.tables.get_mut().genres.push(genre);
        self
    }

    /// Insert an album row directly, skipping reference checks
    pub fn with_album(mut self, album: Album) -> Self {
        self.tables.get_mut().albums.push(stored(&album));
        self
    }

    /// Make every following call fail like a lost connection
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of catalog calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn list_albums(&self) -> Result<Vec<Album>, DbError> {
        self.enter()?;
        let tables = self.tables.read().await;
        Ok(tables.albums.iter().filter_map(|a| tables.joined(a)).collect())
    }

    async fn get_album(&self, id: &str) -> Result<Option<Album>, DbError> {
        self.enter()?;
        let tables = self.tables.read().await;
        Ok(tables
            .albums
            .iter()
            .find(|a| a.id == id)
            .and_then(|a| tables.joined(a)))
    }

    async fn create_album(&self, album: &Album) -> Result<(), DbError> {
        self.enter()?;
        let mut tables = self.tables.write().await;

        if tables.albums.iter().any(|a| a.id == album.id) {
            return Err(constraint_violation(format!(
                "duplicate key value violates unique constraint \"albums_pkey\" ({})",
                album.id
            )));
        }
        tables.check_references(album)?;

        tables.albums.push(stored(album));
        Ok(())
    }

    async fn update_album(&self, album: &Album) -> Result<u64, DbError> {
        self.enter()?;
        let mut tables = self.tables.write().await;

        let Some(index) = tables.albums.iter().position(|a| a.id == album.id) else {
            return Ok(0);
        };
        tables.check_references(album)?;

        tables.albums[index] = stored(album);
        Ok(1)
    }

    async fn delete_album(&self, id: &str) -> Result<u64, DbError> {
        self.enter()?;
        let mut tables = self.tables.write().await;

        let before = tables.albums.len();
        tables.albums.retain(|a| a.id != id);
        Ok((before - tables.albums.len()) as u64)
    }

    async fn list_artists(&self) -> Result<Vec<Artist>, DbError> {
        self.enter()?;
        Ok(self.tables.read().await.artists.clone())
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, DbError> {
        self.enter()?;
        Ok(self.tables.read().await.genres.clone())
    }
}
