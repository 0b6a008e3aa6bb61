pub mod config;
pub mod error;
pub mod models;

pub use config::Settings;
pub use error::{Result, VaultError};
pub use models::{
    generate_album_id, Album, AlbumCondition, Artist, ErrorResponse, Genre, ALBUM_ID_PREFIX,
    ALBUM_ID_SUFFIX_LEN,
};
