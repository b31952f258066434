use thiserror::Error;

/// Raised when accounting input violates its constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("record {index} has negative size: {size_bytes}")]
    NegativeSize { index: usize, size_bytes: i64 },
    #[error("total storage usage overflows u64 at record {index}")]
    UsageOverflow { index: usize },
    #[error("total storage usage {0} exceeds the largest evaluable used_bytes")]
    UsageOutOfRange(u64),
    #[error("used_bytes must be non-negative, got {0}")]
    NegativeUsedBytes(i64),
    #[error("quota_bytes must be greater than zero, got {0}")]
    NonPositiveQuota(i64),
}
