//! Backend logic for the PCP passenger-flow dashboard.
//!
//! The dashboard shows, per 15-minute time bucket, how many passengers are
//! presenting at the Passenger Clearance Point, how long each of the three
//! queues (eGates, EEA desks, non-EEA desks) is expected to take, the
//! arrivals feeding the bucket, and a breakdown of the passenger mix by
//! clearance category. This crate parses the snapshot feeds, derives the
//! view-models the frontend applies, and coordinates bucket navigation so
//! that only the latest requested bucket is ever rendered.

pub mod config;
pub mod core;
pub mod error;
pub mod parsing;
pub mod services;
pub mod session;
pub mod snapshot;

pub use config::DashboardConfig;
pub use error::{DashboardError, DashboardResult};
pub use session::{DashboardSession, DashboardView};
