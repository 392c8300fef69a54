//! Crate-level error type.

use crate::snapshot::SnapshotError;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("time bucket {bucket} is out of range (snapshot has {len} buckets)")]
    BucketOutOfRange { bucket: usize, len: usize },

    #[error("snapshot fetch failed: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("configuration error: {0}")]
    Configuration(String),
}
