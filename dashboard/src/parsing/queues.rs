use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::core::domain::{QueueSnapshot, TimeBucketMetrics};

/// Raw JSON structure for one time bucket, as the backend emits it.
#[derive(Debug, Deserialize)]
struct RawQueueRecord {
    #[serde(rename = "TimeBucket")]
    time_bucket: String,
    #[serde(rename = "eGates_Pax")]
    egates_pax: u32,
    #[serde(rename = "EEA_Pax")]
    eea_pax: u32,
    #[serde(rename = "nonEEA_Pax")]
    non_eea_pax: u32,
    #[serde(rename = "eGates_EstWait")]
    egates_est_wait: u32,
    #[serde(rename = "EEA_EstWait")]
    eea_est_wait: u32,
    #[serde(rename = "nonEEA_EstWait")]
    non_eea_est_wait: u32,
}

impl From<RawQueueRecord> for TimeBucketMetrics {
    fn from(raw: RawQueueRecord) -> Self {
        TimeBucketMetrics {
            label: raw.time_bucket,
            egates_pax: raw.egates_pax,
            eea_pax: raw.eea_pax,
            non_eea_pax: raw.non_eea_pax,
            egates_wait_minutes: raw.egates_est_wait,
            eea_wait_minutes: raw.eea_est_wait,
            non_eea_wait_minutes: raw.non_eea_est_wait,
        }
    }
}

/// Parse a queue-metrics snapshot file into a [`QueueSnapshot`].
pub fn parse_queue_snapshot(path: &Path) -> Result<QueueSnapshot> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read queue snapshot: {}", path.display()))?;

    parse_queue_snapshot_str(&content)
}

/// Parse a queue-metrics snapshot from a JSON string.
pub fn parse_queue_snapshot_str(json: &str) -> Result<QueueSnapshot> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    let raw: Vec<RawQueueRecord> = serde_path_to_error::deserialize(deserializer)
        .context("Queue snapshot is not a valid array of time-bucket records")?;

    Ok(QueueSnapshot::new(raw.into_iter().map(Into::into).collect()))
}
