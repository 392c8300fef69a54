//! Snapshot access layer: repository trait plus in-memory and file-backed
//! implementations.

pub mod file;
pub mod local;
pub mod repository;

pub use file::FileRepository;
pub use local::LocalRepository;
pub use repository::{SnapshotError, SnapshotRepository, SnapshotResult};
