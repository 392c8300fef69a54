//! File-backed snapshot repository.
//!
//! Reads the three feeds from a data directory using the upstream file
//! layout. Missing files surface as `NotFound`, unreadable files as `Io`,
//! and undecodable content as `MalformedPayload`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::core::domain::{Arrival, Passenger, QueueSnapshot};
use crate::parsing;
use crate::snapshot::repository::{SnapshotError, SnapshotRepository, SnapshotResult};

pub const QUEUES_FILE: &str = "Dashboard-DesksQueues.json";
pub const ARRIVALS_FILE: &str = "Dashboard-ArrivalsInput.json";
pub const PASSENGERS_FILE: &str = "Dashboard-PassengerInput.json";

/// Snapshot repository over a directory of JSON feed files.
#[derive(Debug, Clone)]
pub struct FileRepository {
    data_dir: PathBuf,
}

impl FileRepository {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn read(&self, name: &str) -> SnapshotResult<String> {
        let path = self.data_dir.join(name);
        if !path.exists() {
            return Err(SnapshotError::NotFound(path.display().to_string()));
        }

        std::fs::read_to_string(&path).map_err(|source| SnapshotError::Io {
            name: name.to_string(),
            source,
        })
    }
}

fn malformed(name: &str, err: anyhow::Error) -> SnapshotError {
    SnapshotError::MalformedPayload {
        name: name.to_string(),
        detail: format!("{:#}", err),
    }
}

#[async_trait]
impl SnapshotRepository for FileRepository {
    async fn fetch_queue_snapshot(&self) -> SnapshotResult<QueueSnapshot> {
        let content = self.read(QUEUES_FILE)?;
        parsing::queues::parse_queue_snapshot_str(&content).map_err(|e| malformed(QUEUES_FILE, e))
    }

    async fn fetch_arrivals(&self) -> SnapshotResult<Vec<Arrival>> {
        let content = self.read(ARRIVALS_FILE)?;
        parsing::arrivals::parse_arrivals_str(&content).map_err(|e| malformed(ARRIVALS_FILE, e))
    }

    async fn fetch_passengers(&self) -> SnapshotResult<Vec<Passenger>> {
        let content = self.read(PASSENGERS_FILE)?;
        parsing::passengers::parse_passengers_str(&content)
            .map_err(|e| malformed(PASSENGERS_FILE, e))
    }
}
