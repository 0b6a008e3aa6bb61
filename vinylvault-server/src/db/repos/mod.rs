//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and issues one parameterized
//! statement per call:
//! - Album reads use inner JOINs to embed artist and genre (no N+1)
//! - "No row" on single lookups becomes `None`, never an error
//! - Driver errors are passed through unchanged

pub mod albums;
pub mod artists;
pub mod genres;

pub use albums::AlbumRepo;
pub use artists::ArtistRepo;
pub use genres::GenreRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
