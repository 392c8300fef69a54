//! Repository trait for abstracting snapshot access.
//!
//! The dashboard consumes three JSON feeds; this trait lets the session
//! layer work against any source (local files, an in-memory store for
//! tests, an HTTP backend) via dependency injection.

use async_trait::async_trait;

use crate::core::domain::{Arrival, Passenger, QueueSnapshot};

/// Result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Error type for snapshot operations.
///
/// Network failure and malformed payload are deliberately distinct
/// variants so callers can tell "the backend was unreachable" apart from
/// "the backend sent something we cannot decode".
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("network error: {0}")]
    Network(String),

    #[error("snapshot not found: {0}")]
    NotFound(String),

    #[error("failed to read snapshot {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot payload {name}: {detail}")]
    MalformedPayload { name: String, detail: String },
}

/// Repository trait for the dashboard's snapshot feeds.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so a session can be shared across
/// tasks.
///
/// # Error Handling
/// All methods return `SnapshotResult<T>` wrapping either the decoded feed
/// or a `SnapshotError` describing what went wrong.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Fetch the per-bucket queue metrics feed.
    async fn fetch_queue_snapshot(&self) -> SnapshotResult<QueueSnapshot>;

    /// Fetch the arrivals feed.
    async fn fetch_arrivals(&self) -> SnapshotResult<Vec<Arrival>>;

    /// Fetch the passenger manifest feed.
    async fn fetch_passengers(&self) -> SnapshotResult<Vec<Passenger>>;
}
