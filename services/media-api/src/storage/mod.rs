pub mod database;
pub mod error;
pub mod repository;
pub mod schema;

pub use database::MediaDatabase;
pub use error::StorageError;
pub use repository::{MediaAssetRecord, MediaRepository, NewMediaAsset};

pub const MEDIA_DB_FILENAME: &str = "media.db";
