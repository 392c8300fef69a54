//! Domain models for queue metrics, passengers and arrivals.
//!
//! This module provides the core data structures behind the dashboard:
//! per-bucket queue metrics, the passenger manifest entries that feed the
//! passenger-mix breakdown, and the arrivals rows shown alongside them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The three queues at the Passenger Clearance Point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueueKind {
    EGates,
    EeaDesk,
    NonEeaDesk,
}

impl QueueKind {
    /// All queues, in the order the dashboard displays them.
    pub const ALL: [QueueKind; 3] = [QueueKind::EGates, QueueKind::EeaDesk, QueueKind::NonEeaDesk];

    /// Display name used on the queue panel.
    pub fn display_name(&self) -> &'static str {
        match self {
            QueueKind::EGates => "eGates",
            QueueKind::EeaDesk => "EEA Desks",
            QueueKind::NonEeaDesk => "Non-EEA Desks",
        }
    }
}

/// Queue metrics for one 15-minute time bucket.
///
/// Wait estimates are whole minutes; zero means no wait. `label` is the
/// display string for the bucket's start time, e.g. `"14:45"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBucketMetrics {
    pub label: String,
    pub egates_pax: u32,
    pub eea_pax: u32,
    pub non_eea_pax: u32,
    pub egates_wait_minutes: u32,
    pub eea_wait_minutes: u32,
    pub non_eea_wait_minutes: u32,
}

impl TimeBucketMetrics {
    /// Passengers joining the given queue in this bucket.
    pub fn pax(&self, queue: QueueKind) -> u32 {
        match queue {
            QueueKind::EGates => self.egates_pax,
            QueueKind::EeaDesk => self.eea_pax,
            QueueKind::NonEeaDesk => self.non_eea_pax,
        }
    }

    /// Estimated wait in minutes for the given queue.
    pub fn wait(&self, queue: QueueKind) -> u32 {
        match queue {
            QueueKind::EGates => self.egates_wait_minutes,
            QueueKind::EeaDesk => self.eea_wait_minutes,
            QueueKind::NonEeaDesk => self.non_eea_wait_minutes,
        }
    }

    /// Total passengers presenting across all three queues.
    pub fn total_pax(&self) -> u32 {
        self.egates_pax + self.eea_pax + self.non_eea_pax
    }
}

/// An ordered, contiguous, zero-indexed sequence of time buckets.
///
/// All access goes through [`QueueSnapshot::bucket`], so neighbouring-bucket
/// lookups (trend, bucket-range label) can never index out of bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueSnapshot {
    buckets: Vec<TimeBucketMetrics>,
}

impl QueueSnapshot {
    pub fn new(buckets: Vec<TimeBucketMetrics>) -> Self {
        Self { buckets }
    }

    /// Bounds-checked bucket accessor.
    pub fn bucket(&self, idx: usize) -> Option<&TimeBucketMetrics> {
        self.buckets.get(idx)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Index of the last bucket, or `None` for an empty snapshot.
    pub fn last_bucket(&self) -> Option<usize> {
        self.buckets.len().checked_sub(1)
    }

    /// Clamp a requested bucket index into the valid range.
    ///
    /// An empty snapshot clamps everything to 0; callers must still check
    /// emptiness before rendering.
    pub fn clamp(&self, idx: usize) -> usize {
        match self.last_bucket() {
            Some(last) => idx.min(last),
            None => 0,
        }
    }
}

/// One manifest entry within a bucket window.
///
/// Passengers are ephemeral per render call: not persisted and not
/// deduplicated across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    /// ISO-3166 alpha-3 country code, uppercased.
    pub nationality: String,
    /// `None` when the manifest carried no usable age.
    pub age: Option<u32>,
    /// Document type code; `"P"` is a machine-readable passport.
    pub document_type: String,
    pub in_transit: bool,
    /// When the passenger reaches the Passenger Clearance Point.
    pub pcp_time: NaiveDateTime,
}

/// One arrivals-table row: a flight and its API-derived queue splits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    pub iata: String,
    pub origin: String,
    pub gate_stand: String,
    pub scheduled_time: String,
    pub est_arrival: String,
    pub act_arrival: String,
    pub est_chox: String,
    pub act_chox: String,
    /// Estimated PCP arrival as displayed, `"HH:MM"`.
    pub est_pcp: String,
    pub est_pcp_hour: u32,
    pub est_pcp_minute: u32,
    pub pcp_pax: u32,
    pub api_egates: u32,
    pub api_eea: u32,
    pub api_non_eea: u32,
}

/// Direction of a queue's wait relative to the previous bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Increase,
    Decrease,
    Neutral,
}

impl Trend {
    /// Strict comparison; equal waits are neutral.
    pub fn between(current: u32, previous: u32) -> Trend {
        use std::cmp::Ordering;
        match current.cmp(&previous) {
            Ordering::Greater => Trend::Increase,
            Ordering::Less => Trend::Decrease,
            Ordering::Equal => Trend::Neutral,
        }
    }
}

/// Highlight level applied to a queue panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Normal,
    Warning,
    Breach,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(label: &str, waits: [u32; 3]) -> TimeBucketMetrics {
        TimeBucketMetrics {
            label: label.to_string(),
            egates_pax: 10,
            eea_pax: 20,
            non_eea_pax: 30,
            egates_wait_minutes: waits[0],
            eea_wait_minutes: waits[1],
            non_eea_wait_minutes: waits[2],
        }
    }

    #[test]
    fn per_queue_accessors() {
        let b = bucket("08:00", [1, 2, 3]);
        assert_eq!(b.pax(QueueKind::EGates), 10);
        assert_eq!(b.pax(QueueKind::EeaDesk), 20);
        assert_eq!(b.pax(QueueKind::NonEeaDesk), 30);
        assert_eq!(b.wait(QueueKind::EGates), 1);
        assert_eq!(b.wait(QueueKind::EeaDesk), 2);
        assert_eq!(b.wait(QueueKind::NonEeaDesk), 3);
        assert_eq!(b.total_pax(), 60);
    }

    #[test]
    fn snapshot_bounds() {
        let snapshot = QueueSnapshot::new(vec![
            bucket("08:00", [0, 0, 0]),
            bucket("08:15", [0, 0, 0]),
        ]);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.last_bucket(), Some(1));
        assert!(snapshot.bucket(1).is_some());
        assert!(snapshot.bucket(2).is_none());
        assert_eq!(snapshot.clamp(7), 1);
        assert_eq!(snapshot.clamp(0), 0);
    }

    #[test]
    fn empty_snapshot() {
        let snapshot = QueueSnapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.last_bucket(), None);
        assert_eq!(snapshot.clamp(5), 0);
        assert!(snapshot.bucket(0).is_none());
    }

    #[test]
    fn trend_is_strict() {
        assert_eq!(Trend::between(10, 5), Trend::Increase);
        assert_eq!(Trend::between(5, 10), Trend::Decrease);
        assert_eq!(Trend::between(7, 7), Trend::Neutral);
    }
}
