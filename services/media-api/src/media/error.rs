use media_vault_quota::ValidationError;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },
    #[error("storage accounting failed: {0}")]
    Accounting(#[from] ValidationError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl MediaError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        MediaError::InvalidInput {
            field,
            message: message.into(),
        }
    }
}
