//! In-memory snapshot repository.
//!
//! Stores the three feeds in memory behind an `RwLock`, giving tests and
//! local development a fast, deterministic, isolated source. A health flag
//! lets tests inject fetch failures.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::core::domain::{Arrival, Passenger, QueueSnapshot};
use crate::snapshot::repository::{SnapshotError, SnapshotRepository, SnapshotResult};

/// In-memory snapshot repository.
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    queues: QueueSnapshot,
    arrivals: Vec<Arrival>,
    passengers: Vec<Passenger>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            queues: QueueSnapshot::default(),
            arrivals: Vec::new(),
            passengers: Vec::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_queue_snapshot(&self, queues: QueueSnapshot) {
        self.data.write().unwrap().queues = queues;
    }

    pub fn set_arrivals(&self, arrivals: Vec<Arrival>) {
        self.data.write().unwrap().arrivals = arrivals;
    }

    pub fn set_passengers(&self, passengers: Vec<Passenger>) {
        self.data.write().unwrap().passengers = passengers;
    }

    /// Mark the repository healthy or unhealthy; unhealthy fetches fail
    /// with a network error.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().unwrap().is_healthy = healthy;
    }

    fn check_health(&self) -> SnapshotResult<()> {
        if self.data.read().unwrap().is_healthy {
            Ok(())
        } else {
            Err(SnapshotError::Network(
                "local repository marked unhealthy".to_string(),
            ))
        }
    }
}

#[async_trait]
impl SnapshotRepository for LocalRepository {
    async fn fetch_queue_snapshot(&self) -> SnapshotResult<QueueSnapshot> {
        self.check_health()?;
        Ok(self.data.read().unwrap().queues.clone())
    }

    async fn fetch_arrivals(&self) -> SnapshotResult<Vec<Arrival>> {
        self.check_health()?;
        Ok(self.data.read().unwrap().arrivals.clone())
    }

    async fn fetch_passengers(&self) -> SnapshotResult<Vec<Passenger>> {
        self.check_health()?;
        Ok(self.data.read().unwrap().passengers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::TimeBucketMetrics;

    fn bucket(label: &str) -> TimeBucketMetrics {
        TimeBucketMetrics {
            label: label.to_string(),
            egates_pax: 1,
            eea_pax: 2,
            non_eea_pax: 3,
            egates_wait_minutes: 0,
            eea_wait_minutes: 0,
            non_eea_wait_minutes: 0,
        }
    }

    #[tokio::test]
    async fn round_trips_stored_feeds() {
        let repo = LocalRepository::new();
        repo.set_queue_snapshot(QueueSnapshot::new(vec![bucket("08:00")]));

        let queues = repo.fetch_queue_snapshot().await.unwrap();
        assert_eq!(queues.len(), 1);
        assert!(repo.fetch_arrivals().await.unwrap().is_empty());
        assert!(repo.fetch_passengers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unhealthy_repository_fails_with_network_error() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);

        let err = repo.fetch_queue_snapshot().await.unwrap_err();
        assert!(matches!(err, SnapshotError::Network(_)));

        repo.set_healthy(true);
        assert!(repo.fetch_queue_snapshot().await.is_ok());
    }
}
