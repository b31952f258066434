use std::sync::Arc;

use media_vault_quota::{
    calculate_quota_status, calculate_storage_usage, QuotaStatusInput, StorageRecord,
    ValidationError,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::storage::{MediaAssetRecord, MediaRepository};

use super::{CreateMediaInput, MediaError, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};

/// Quota status of one owner together with the number of assets counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSummary {
    pub used_bytes: u64,
    pub quota_bytes: u64,
    pub remaining_bytes: u64,
    pub usage_ratio: f64,
    pub is_over_quota: bool,
    pub total_items: u64,
}

#[derive(Clone)]
pub struct MediaService {
    repository: Arc<dyn MediaRepository>,
    quota_bytes: i64,
}

impl MediaService {
    pub fn new(repository: Arc<dyn MediaRepository>, quota_bytes: i64) -> Self {
        Self {
            repository,
            quota_bytes,
        }
    }

    pub fn list(
        &self,
        owner_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<MediaAssetRecord>, MediaError> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        if !(1..=MAX_LIST_LIMIT).contains(&limit) {
            return Err(MediaError::invalid(
                "limit",
                format!("limit must be between 1 and {MAX_LIST_LIMIT}"),
            ));
        }

        let assets = self.repository.list_assets(owner_id, limit)?;
        debug!(owner_id, limit, returned = assets.len(), "listed media assets");
        Ok(assets)
    }

    pub fn create(
        &self,
        owner_id: &str,
        input: CreateMediaInput,
    ) -> Result<MediaAssetRecord, MediaError> {
        let asset = input.validate()?;
        let created = self.repository.create_asset(owner_id, asset)?;

        info!(
            owner_id,
            asset_id = %created.id,
            size_bytes = created.size_bytes,
            tags = created.tags.len(),
            "media asset created"
        );
        Ok(created)
    }

    pub fn storage_summary(&self, owner_id: &str) -> Result<StorageSummary, MediaError> {
        let records: Vec<StorageRecord> = self
            .repository
            .list_sizes_for_owner(owner_id)?
            .into_iter()
            .map(StorageRecord::from)
            .collect();

        let usage = calculate_storage_usage(&records)?;
        let used_bytes = i64::try_from(usage.total_bytes)
            .map_err(|_| ValidationError::UsageOutOfRange(usage.total_bytes))?;
        let status = calculate_quota_status(QuotaStatusInput::new(used_bytes, self.quota_bytes))?;

        Ok(StorageSummary {
            used_bytes: status.used_bytes,
            quota_bytes: status.quota_bytes,
            remaining_bytes: status.remaining_bytes,
            usage_ratio: status.usage_ratio,
            is_over_quota: status.is_over_quota,
            total_items: usage.total_items,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::storage::{NewMediaAsset, StorageError};

    #[derive(Default)]
    struct FakeRepository {
        sizes: Vec<i64>,
        created: Mutex<Vec<(String, NewMediaAsset)>>,
        last_limit: Mutex<Option<u32>>,
    }

    impl MediaRepository for FakeRepository {
        fn list_sizes_for_owner(&self, _owner_id: &str) -> Result<Vec<i64>, StorageError> {
            Ok(self.sizes.clone())
        }

        fn list_assets(
            &self,
            _owner_id: &str,
            limit: u32,
        ) -> Result<Vec<MediaAssetRecord>, StorageError> {
            *self.last_limit.lock().unwrap() = Some(limit);
            Ok(Vec::new())
        }

        fn create_asset(
            &self,
            owner_id: &str,
            asset: NewMediaAsset,
        ) -> Result<MediaAssetRecord, StorageError> {
            self.created
                .lock()
                .unwrap()
                .push((owner_id.to_string(), asset.clone()));
            Ok(MediaAssetRecord {
                id: "asset-1".to_string(),
                owner_id: owner_id.to_string(),
                title: asset.title,
                description: asset.description,
                mime_type: asset.mime_type,
                size_bytes: asset.size_bytes,
                is_public: asset.is_public,
                created_at: "2024-01-01T00:00:00.000000Z".to_string(),
                tags: asset.tags,
            })
        }
    }

    fn service(sizes: Vec<i64>, quota: i64) -> (MediaService, Arc<FakeRepository>) {
        let repo = Arc::new(FakeRepository {
            sizes,
            ..Default::default()
        });
        (MediaService::new(repo.clone(), quota), repo)
    }

    #[test]
    fn summary_combines_usage_and_quota() {
        let (service, _) = service(vec![1024, 2048, 0], 6144);
        let summary = service.storage_summary("alice").unwrap();
        assert_eq!(
            summary,
            StorageSummary {
                used_bytes: 3072,
                quota_bytes: 6144,
                remaining_bytes: 3072,
                usage_ratio: 0.5,
                is_over_quota: false,
                total_items: 3,
            }
        );
    }

    #[test]
    fn summary_for_owner_without_assets() {
        let (service, _) = service(Vec::new(), 100);
        let summary = service.storage_summary("nobody").unwrap();
        assert_eq!(summary.used_bytes, 0);
        assert_eq!(summary.remaining_bytes, 100);
        assert_eq!(summary.total_items, 0);
    }

    #[test]
    fn corrupt_size_surfaces_as_accounting_error() {
        let (service, _) = service(vec![10, -3], 100);
        let err = service.storage_summary("alice").unwrap_err();
        assert!(matches!(
            err,
            MediaError::Accounting(ValidationError::NegativeSize { index: 1, .. })
        ));
    }

    #[test]
    fn total_beyond_signed_range_is_not_reported_as_overflow() {
        let (service, _) = service(vec![i64::MAX, 1], 100);
        let err = service.storage_summary("alice").unwrap_err();
        assert!(matches!(
            err,
            MediaError::Accounting(ValidationError::UsageOutOfRange(total))
                if total == i64::MAX as u64 + 1
        ));
    }

    #[test]
    fn list_limit_defaults_and_bounds() {
        let (service, repo) = service(Vec::new(), 100);
        service.list("alice", None).unwrap();
        assert_eq!(*repo.last_limit.lock().unwrap(), Some(DEFAULT_LIST_LIMIT));

        service.list("alice", Some(MAX_LIST_LIMIT)).unwrap();
        assert_eq!(*repo.last_limit.lock().unwrap(), Some(MAX_LIST_LIMIT));

        assert!(matches!(
            service.list("alice", Some(0)),
            Err(MediaError::InvalidInput { field: "limit", .. })
        ));
        assert!(matches!(
            service.list("alice", Some(MAX_LIST_LIMIT + 1)),
            Err(MediaError::InvalidInput { field: "limit", .. })
        ));
    }

    #[test]
    fn create_passes_normalized_asset_to_repository() {
        let (service, repo) = service(Vec::new(), 100);
        let created = service
            .create(
                "alice",
                CreateMediaInput {
                    title: "Clip".to_string(),
                    description: None,
                    mime_type: "video/mp4".to_string(),
                    size_bytes: 42,
                    is_public: Some(true),
                    tags: Some(vec!["Cats".to_string(), "cats ".to_string()]),
                },
            )
            .unwrap();

        assert_eq!(created.tags, vec!["cats"]);
        let calls = repo.created.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "alice");
        assert!(calls[0].1.is_public);
    }

    #[test]
    fn invalid_create_never_reaches_repository() {
        let (service, repo) = service(Vec::new(), 100);
        let result = service.create(
            "alice",
            CreateMediaInput {
                title: String::new(),
                description: None,
                mime_type: "video/mp4".to_string(),
                size_bytes: 42,
                is_public: None,
                tags: None,
            },
        );

        assert!(matches!(result, Err(MediaError::InvalidInput { .. })));
        assert!(repo.created.lock().unwrap().is_empty());
    }
}
