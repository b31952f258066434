use std::io;

use rusqlite;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),
    #[error("connection poisoned")]
    ConnectionPoisoned,
    #[error("tag {0} could not be resolved after insert")]
    UnresolvedTag(String),
    #[error("io error: {0}")]
    IoError(#[from] io::Error),
}
