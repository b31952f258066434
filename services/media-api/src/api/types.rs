use serde::{Deserialize, Serialize};

use crate::storage::MediaAssetRecord;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListMediaQuery {
    pub limit: Option<u32>,
}

/// Asset as returned to clients; the owner is implied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAsset {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub mime_type: String,
    pub size_bytes: i64,
    pub is_public: bool,
    pub created_at: String,
    pub tags: Vec<String>,
}

impl From<MediaAssetRecord> for MediaAsset {
    fn from(record: MediaAssetRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            mime_type: record.mime_type,
            size_bytes: record.size_bytes,
            is_public: record.is_public,
            created_at: record.created_at,
            tags: record.tags,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMediaResponse {
    pub items: Vec<MediaAsset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMediaResponse {
    pub asset: MediaAsset,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub details: Option<serde_json::Value>,
}
