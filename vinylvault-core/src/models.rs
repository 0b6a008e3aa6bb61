//! Catalog records shared by the data-access and HTTP layers.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Prefix of server-generated album ids
pub const ALBUM_ID_PREFIX: &str = "alb-";

/// Number of random hex characters after [`ALBUM_ID_PREFIX`]
pub const ALBUM_ID_SUFFIX_LEN: usize = 8;

/// A vinyl record in the collection.
///
/// `artist` and `genre` are filled in by reads (joined by value) and never
/// persisted; writes only carry `artist_id` and `genre_id`. Binding is
/// lenient: absent keys and `null` both take the field's default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist_id: String,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub artist: Option<Artist>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_year: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre_id: String,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    /// 1-5 stars, not range checked
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub condition: AlbumCondition,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Album {
    /// Assign a generated id when none was supplied, returning the id in use.
    pub fn ensure_id(&mut self) -> &str {
        if self.id.is_empty() {
            self.id = generate_album_id();
        }
        &self.id
    }
}

/// Generate an album id: `alb-` followed by the first 8 hex characters of a
/// random v4 UUID.
///
/// Uniqueness is not guaranteed. With 32 random bits a collision becomes
/// likely around 65k generated ids; the insert then fails on the primary key.
pub fn generate_album_id() -> String {
    let uuid = Uuid::new_v4().to_string();
    format!("{}{}", ALBUM_ID_PREFIX, &uuid[..ALBUM_ID_SUFFIX_LEN])
}

/// A recording artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

/// A music genre with its display glyph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// Physical condition of a record.
///
/// The usual grading scale is available as constants, but the column is free
/// text: any value binds, is stored verbatim and reads back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumCondition(Cow<'static, str>);

impl AlbumCondition {
    pub const MINT: Self = Self(Cow::Borrowed("Mint"));
    pub const EXCELLENT: Self = Self(Cow::Borrowed("Excellent"));
    pub const VERY_GOOD: Self = Self(Cow::Borrowed("Very Good"));
    pub const GOOD: Self = Self(Cow::Borrowed("Good"));
    pub const FAIR: Self = Self(Cow::Borrowed("Fair"));
    pub const POOR: Self = Self(Cow::Borrowed("Poor"));

    /// Best to worst
    pub const GRADES: [Self; 6] = [
        Self::MINT,
        Self::EXCELLENT,
        Self::VERY_GOOD,
        Self::GOOD,
        Self::FAIR,
        Self::POOR,
    ];

    pub fn new(text: impl Into<String>) -> Self {
        Self(Cow::Owned(text.into()))
    }

    /// Text stored in the `albums.condition` column
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the value is one of [`AlbumCondition::GRADES`]
    pub fn is_graded(&self) -> bool {
        Self::GRADES.contains(self)
    }
}

impl From<String> for AlbumCondition {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for AlbumCondition {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for AlbumCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
