use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaStatusInput {
    pub used_bytes: i64,
    pub quota_bytes: i64,
}

impl QuotaStatusInput {
    pub fn new(used_bytes: i64, quota_bytes: i64) -> Self {
        Self {
            used_bytes,
            quota_bytes,
        }
    }
}

/// Usage projected against a quota.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuotaStatus {
    pub used_bytes: u64,
    pub quota_bytes: u64,
    pub remaining_bytes: u64,
    /// `used_bytes / quota_bytes`, capped at 1.0.
    pub usage_ratio: f64,
    /// Raw `used_bytes > quota_bytes`, independent of the capped ratio.
    pub is_over_quota: bool,
}

pub fn calculate_quota_status(input: QuotaStatusInput) -> Result<QuotaStatus, ValidationError> {
    let used_bytes = u64::try_from(input.used_bytes)
        .map_err(|_| ValidationError::NegativeUsedBytes(input.used_bytes))?;
    if input.quota_bytes <= 0 {
        return Err(ValidationError::NonPositiveQuota(input.quota_bytes));
    }
    let quota_bytes = input.quota_bytes as u64;

    Ok(evaluate(used_bytes, quota_bytes))
}

fn evaluate(used_bytes: u64, quota_bytes: u64) -> QuotaStatus {
    let remaining_bytes = quota_bytes.saturating_sub(used_bytes);
    let usage_ratio = if quota_bytes == 0 {
        0.0
    } else {
        used_bytes as f64 / quota_bytes as f64
    };

    QuotaStatus {
        used_bytes,
        quota_bytes,
        remaining_bytes,
        usage_ratio: usage_ratio.min(1.0),
        is_over_quota: used_bytes > quota_bytes,
    }
}
