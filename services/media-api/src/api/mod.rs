use std::sync::Arc;

use anyhow::Result;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::warn;

pub mod extract;
pub mod handlers;
pub mod router;
pub mod types;

pub use handlers::*;
pub use router::create_router;
pub use types::*;

use crate::auth::{AuthError, AuthenticatedUser, UserExtractor};
use crate::config::MediaApiConfig;
use crate::media::MediaService;
use crate::storage::{MediaDatabase, MediaRepository};

pub struct ApiState {
    pub media: MediaService,
    pub user_extractor: Arc<UserExtractor>,
    pub config: Arc<MediaApiConfig>,
}

impl ApiState {
    pub fn new(config: MediaApiConfig) -> Result<Self> {
        let database = Arc::new(MediaDatabase::new(config.data_dir.clone())?);
        Self::with_repository(database, config)
    }

    pub fn with_repository(
        repository: Arc<dyn MediaRepository>,
        config: MediaApiConfig,
    ) -> Result<Self> {
        let user_extractor = Arc::new(UserExtractor::new(&config)?);
        let media = MediaService::new(repository, config.user_storage_quota_bytes);

        Ok(Self {
            media,
            user_extractor,
            config: Arc::new(config),
        })
    }
}

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthenticatedUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        match state.user_extractor.extract_from_request(&parts.headers) {
            Ok(context) => Ok(AuthenticatedUser(context)),
            Err(err) => {
                warn!(error = %err, path = %parts.uri.path(), "rejected unauthenticated request");
                Err(err)
            }
        }
    }
}
