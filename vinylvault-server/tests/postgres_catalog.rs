//! PostgreSQL catalog tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p vinylvault-server -- --ignored

use sqlx::PgPool;
use vinylvault_core::{generate_album_id, Album, AlbumCondition};
use vinylvault_server::db::{connect_with_retry, Catalog, PgCatalog, RetryPolicy};

const FIXTURE: &str = r#"
CREATE TABLE IF NOT EXISTS artists (id TEXT PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE IF NOT EXISTS genres (id TEXT PRIMARY KEY, name TEXT NOT NULL, icon TEXT);
CREATE TABLE IF NOT EXISTS albums (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    artist_id TEXT NOT NULL REFERENCES artists(id),
    release_year TEXT NOT NULL,
    genre_id TEXT NOT NULL REFERENCES genres(id),
    notes TEXT,
    rating INTEGER NOT NULL,
    condition TEXT NOT NULL
);
INSERT INTO artists (id, name) VALUES ('art-test', 'Test Artist') ON CONFLICT DO NOTHING;
INSERT INTO genres (id, name, icon) VALUES ('gen-test', 'Test Genre', '💿') ON CONFLICT DO NOTHING;
"#;

async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = connect_with_retry(&url, 2, RetryPolicy::default())
        .await
        .expect("pool creation failed");
    sqlx::raw_sql(FIXTURE)
        .execute(&pool)
        .await
        .expect("fixture failed");
    pool
}

fn album(id: &str) -> Album {
    Album {
        id: id.to_string(),
        title: "Fixture".into(),
        artist_id: "art-test".into(),
        artist: None,
        release_year: "2001".into(),
        genre_id: "gen-test".into(),
        genre: None,
        notes: "pressed for tests".into(),
        rating: 3,
        condition: AlbumCondition::VERY_GOOD,
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn album_round_trip() {
    let catalog = PgCatalog::new(pool().await);
    let id = generate_album_id();

    catalog.create_album(&album(&id)).await.unwrap();

    let found = catalog.get_album(&id).await.unwrap().expect("album missing");
    assert_eq!(found.title, "Fixture");
    assert_eq!(found.condition, AlbumCondition::VERY_GOOD);
    assert_eq!(found.artist.unwrap().name, "Test Artist");
    assert_eq!(found.genre.unwrap().icon, "💿");

    let mut changed = album(&id);
    changed.title = "Changed".into();
    assert_eq!(catalog.update_album(&changed).await.unwrap(), 1);
    assert_eq!(catalog.get_album(&id).await.unwrap().unwrap().title, "Changed");

    assert_eq!(catalog.delete_album(&id).await.unwrap(), 1);
    assert!(catalog.get_album(&id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn missing_rows_are_not_errors() {
    let catalog = PgCatalog::new(pool().await);

    assert!(catalog.get_album("alb-absent").await.unwrap().is_none());
    assert_eq!(catalog.update_album(&album("alb-absent")).await.unwrap(), 0);
    assert_eq!(catalog.delete_album("alb-absent").await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn foreign_key_violation_propagates() {
    let catalog = PgCatalog::new(pool().await);
    let mut orphan = album(&generate_album_id());
    orphan.artist_id = "art-missing".into();

    assert!(catalog.create_album(&orphan).await.is_err());
}

#[tokio::test]
#[ignore = "requires database"]
async fn reference_tables_list() {
    let catalog = PgCatalog::new(pool().await);

    let artists = catalog.list_artists().await.unwrap();
    assert!(artists.iter().any(|a| a.id == "art-test"));

    let genres = catalog.list_genres().await.unwrap();
    assert!(genres.iter().any(|g| g.id == "gen-test"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn ungraded_condition_rows_still_list() {
    let pool = pool().await;
    let id = generate_album_id();
    sqlx::query(
        "INSERT INTO albums (id, title, artist_id, release_year, genre_id, notes, rating, condition)
         VALUES ($1, 'Legacy', 'art-test', '1980', 'gen-test', NULL, 0, 'Near Mint')",
    )
    .bind(&id)
    .execute(&pool)
    .await
    .unwrap();

    let catalog = PgCatalog::new(pool);
    let albums = catalog.list_albums().await.unwrap();
    let legacy = albums.iter().find(|a| a.id == id).expect("legacy row missing");
    assert_eq!(legacy.condition.as_str(), "Near Mint");
    assert!(legacy.notes.is_empty());

    catalog.delete_album(&id).await.unwrap();
}
