use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Byte size of a single media asset as read from persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageRecord {
    pub size_bytes: i64,
}

impl StorageRecord {
    pub fn new(size_bytes: i64) -> Self {
        Self { size_bytes }
    }
}

impl From<i64> for StorageRecord {
    fn from(size_bytes: i64) -> Self {
        Self { size_bytes }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub total_bytes: u64,
    pub total_items: u64,
}

/// Sums the sizes of `records` and counts them.
///
/// All records are validated before summing starts, so a negative size anywhere in the slice
/// is reported as [`ValidationError::NegativeSize`] even when an earlier prefix would overflow.
pub fn calculate_storage_usage(records: &[StorageRecord]) -> Result<UsageSummary, ValidationError> {
    let sizes = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            u64::try_from(record.size_bytes).map_err(|_| ValidationError::NegativeSize {
                index,
                size_bytes: record.size_bytes,
            })
        })
        .collect::<Result<Vec<u64>, _>>()?;

    let mut total_bytes: u64 = 0;
    for (index, size) in sizes.into_iter().enumerate() {
        total_bytes = total_bytes
            .checked_add(size)
            .ok_or(ValidationError::UsageOverflow { index })?;
    }

    Ok(UsageSummary {
        total_bytes,
        total_items: records.len() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(sizes: &[i64]) -> Vec<StorageRecord> {
        sizes.iter().copied().map(StorageRecord::from).collect()
    }

    #[test]
    fn sums_sizes_and_counts_records() {
        let summary = calculate_storage_usage(&records(&[1024, 2048, 0])).unwrap();
        assert_eq!(summary.total_bytes, 3072);
        assert_eq!(summary.total_items, 3);
    }

    #[test]
    fn empty_input_is_zero() {
        let summary = calculate_storage_usage(&[]).unwrap();
        assert_eq!(summary, UsageSummary::default());
    }

    #[test]
    fn zero_sized_records_are_counted() {
        let summary = calculate_storage_usage(&records(&[0, 0, 0, 0])).unwrap();
        assert_eq!(summary.total_bytes, 0);
        assert_eq!(summary.total_items, 4);
    }

    #[test]
    fn negative_size_is_rejected_at_any_position() {
        for position in 0..4 {
            let mut sizes = vec![10, 20, 30, 40];
            sizes[position] = -1;
            let err = calculate_storage_usage(&records(&sizes)).unwrap_err();
            assert_eq!(
                err,
                ValidationError::NegativeSize {
                    index: position,
                    size_bytes: -1
                }
            );
        }
    }

    #[test]
    fn order_does_not_change_the_total() {
        let forward = calculate_storage_usage(&records(&[7, 300, 4096, 1])).unwrap();
        let reversed = calculate_storage_usage(&records(&[1, 4096, 300, 7])).unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn petabyte_scale_totals_are_exact() {
        let pib = 1024_i64.pow(5);
        let summary = calculate_storage_usage(&records(&[pib, pib, pib + 1])).unwrap();
        assert_eq!(summary.total_bytes, 3 * 1024_u64.pow(5) + 1);
    }

    #[test]
    fn overflow_is_reported_instead_of_wrapping() {
        let err = calculate_storage_usage(&records(&[i64::MAX, i64::MAX, 2])).unwrap_err();
        assert_eq!(err, ValidationError::UsageOverflow { index: 2 });
    }

    #[test]
    fn negative_size_wins_over_earlier_overflow() {
        let err = calculate_storage_usage(&records(&[i64::MAX, i64::MAX, 2, -5])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeSize {
                index: 3,
                size_bytes: -5
            }
        );
    }
}
