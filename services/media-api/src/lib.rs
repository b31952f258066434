//! Media Vault HTTP service.
//!
//! Authenticated JSON API for per-user media metadata: listing and registering assets with
//! tags, and reporting storage usage against the per-user quota.

pub mod api;
pub mod auth;
pub mod config;
pub mod media;
pub mod storage;

pub use api::{create_router, ApiState, ErrorResponse, MediaAsset};
pub use config::MediaApiConfig;
pub use media::{CreateMediaInput, MediaError, MediaService, StorageSummary};
pub use storage::{MediaDatabase, MediaRepository, StorageError};
