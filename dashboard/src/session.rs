//! Dashboard session: bucket navigation and render coordination.
//!
//! Navigation can outrun the snapshot fetches; without coordination a slow
//! fetch for an earlier bucket could finish last and clobber the latest
//! view. Each render takes a monotonic ticket and checks it after the
//! fetches complete: a render that is no longer the newest returns
//! `Ok(None)` and its result is never applied.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::services::arrivals::{build_arrivals_table, ArrivalsTableView};
use crate::services::passenger_mix::{passenger_mix, PassengerMixBreakdown};
use crate::services::queue_board::{build_queue_board, QueueBoardView};
use crate::snapshot::SnapshotRepository;

/// Everything the frontend applies for one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub bucket: usize,
    pub board: QueueBoardView,
    pub arrivals: ArrivalsTableView,
    pub mix: PassengerMixBreakdown,
}

/// A dashboard viewing session over one snapshot repository.
///
/// Methods take `&self`, so a session wrapped in an `Arc` can be driven
/// from several tasks; only the most recent render ever produces a view.
pub struct DashboardSession<R: SnapshotRepository> {
    repository: Arc<R>,
    config: DashboardConfig,
    current_bucket: AtomicUsize,
    latest_ticket: AtomicU64,
}

impl<R: SnapshotRepository> DashboardSession<R> {
    pub fn new(repository: Arc<R>, config: DashboardConfig) -> Self {
        Self {
            repository,
            config,
            current_bucket: AtomicUsize::new(0),
            latest_ticket: AtomicU64::new(0),
        }
    }

    /// The bucket index of the last applied render.
    pub fn current_bucket(&self) -> usize {
        self.current_bucket.load(Ordering::SeqCst)
    }

    /// Fetch all three feeds and build the view for bucket `tb`.
    ///
    /// The requested index is clamped into the snapshot's range, so
    /// navigating past either end renders the end bucket instead of
    /// faulting. Returns `Ok(None)` when a newer render superseded this
    /// one while its fetches were in flight. A failed fetch returns `Err`
    /// and leaves the session's current bucket untouched, so the caller
    /// keeps its previous view.
    pub async fn show_bucket(&self, tb: usize) -> Result<Option<DashboardView>, DashboardError> {
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;

        let queues = self.repository.fetch_queue_snapshot().await?;
        let arrivals = self.repository.fetch_arrivals().await?;
        let passengers = self.repository.fetch_passengers().await?;

        if self.latest_ticket.load(Ordering::SeqCst) != ticket {
            log::debug!("Discarding stale render for bucket {}", tb);
            return Ok(None);
        }

        if queues.is_empty() {
            return Err(DashboardError::BucketOutOfRange { bucket: tb, len: 0 });
        }
        let tb = queues.clamp(tb);

        let board = build_queue_board(&queues, tb, &self.config)?;
        let arrivals = build_arrivals_table(&arrivals, tb);
        let mix = passenger_mix(&passengers, tb, &self.config);

        self.current_bucket.store(tb, Ordering::SeqCst);

        Ok(Some(DashboardView {
            bucket: tb,
            board,
            arrivals,
            mix,
        }))
    }

    /// Re-render the current bucket.
    pub async fn render_current(&self) -> Result<Option<DashboardView>, DashboardError> {
        self.show_bucket(self.current_bucket()).await
    }

    /// Navigate one bucket back, clamped at the first bucket.
    pub async fn previous(&self) -> Result<Option<DashboardView>, DashboardError> {
        self.show_bucket(self.current_bucket().saturating_sub(1))
            .await
    }

    /// Navigate one bucket forward, clamped at the last bucket.
    pub async fn next(&self) -> Result<Option<DashboardView>, DashboardError> {
        self.show_bucket(self.current_bucket() + 1).await
    }
}
