//! Media Vault storage quota accounting.
//!
//! Two pure functions form the accounting engine: [`calculate_storage_usage`] folds the
//! per-asset byte sizes of one owner into a [`UsageSummary`], and [`calculate_quota_status`]
//! projects that usage against a quota. Inputs are validated at the function boundary and
//! rejected with a [`ValidationError`] before any computation happens.

pub mod error;
pub mod status;
pub mod usage;

pub use error::ValidationError;
pub use status::{calculate_quota_status, QuotaStatus, QuotaStatusInput};
pub use usage::{calculate_storage_usage, StorageRecord, UsageSummary};

/// Bytes in one gibibyte.
pub const GIB: u64 = 1024 * 1024 * 1024;

/// Storage allowance applied to every user (5 GiB).
pub const DEFAULT_USER_STORAGE_QUOTA_BYTES: u64 = 5 * GIB;
