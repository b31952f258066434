use serde::{Deserialize, Serialize};

use super::StorageError;

/// A persisted media asset with the names of its linked tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAssetRecord {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub mime_type: String,
    pub size_bytes: i64,
    pub is_public: bool,
    pub created_at: String,
    pub tags: Vec<String>,
}

/// Already-validated values for a new asset. `tags` must be normalized and unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMediaAsset {
    pub title: String,
    pub description: Option<String>,
    pub mime_type: String,
    pub size_bytes: i64,
    pub is_public: bool,
    pub tags: Vec<String>,
}

/// Data access for media metadata, always scoped to one owner.
pub trait MediaRepository: Send + Sync {
    /// Raw `size_bytes` of every asset owned by `owner_id`.
    fn list_sizes_for_owner(&self, owner_id: &str) -> Result<Vec<i64>, StorageError>;

    /// Newest assets first, at most `limit` of them.
    fn list_assets(&self, owner_id: &str, limit: u32) -> Result<Vec<MediaAssetRecord>, StorageError>;

    /// Inserts the asset, upserts its tags by name and links them in a single transaction.
    fn create_asset(
        &self,
        owner_id: &str,
        asset: NewMediaAsset,
    ) -> Result<MediaAssetRecord, StorageError>;
}
