use std::sync::Arc;

use media_vault_api::media::CreateMediaInput;
use media_vault_api::{MediaDatabase, MediaService};
use media_vault_quota::{StorageRecord, DEFAULT_USER_STORAGE_QUOTA_BYTES};
use tempfile::TempDir;

pub use media_vault_api;
pub use media_vault_quota;

/// A media service backed by a temporary database seeded with one owner's assets.
pub struct StorageBenchFixture {
    pub service: MediaService,
    pub owner_id: String,
    pub temp_dir: TempDir,
}

impl StorageBenchFixture {
    pub fn new(owner_id: &str, assets: usize) -> Self {
        let temp_dir = TempDir::new().expect("tempdir");
        let database =
            MediaDatabase::new(temp_dir.path().to_path_buf()).expect("open bench database");
        let service = MediaService::new(
            Arc::new(database),
            DEFAULT_USER_STORAGE_QUOTA_BYTES as i64,
        );

        for index in 0..assets {
            service
                .create(owner_id, bench_asset(index))
                .expect("seed bench asset");
        }

        Self {
            service,
            owner_id: owner_id.to_string(),
            temp_dir,
        }
    }
}

/// Deterministic record sizes between 1 KiB and roughly 8 MiB.
pub fn synthetic_records(count: usize) -> Vec<StorageRecord> {
    (0..count)
        .map(|index| StorageRecord::new(1024 + ((index as i64 * 7919) % 8_000_000)))
        .collect()
}

fn bench_asset(index: usize) -> CreateMediaInput {
    CreateMediaInput {
        title: format!("bench asset {index}"),
        description: None,
        mime_type: "image/jpeg".to_string(),
        size_bytes: 1024 * (index as i64 + 1),
        is_public: Some(index % 2 == 0),
        tags: Some(vec![format!("batch-{}", index % 4), "bench".to_string()]),
    }
}
