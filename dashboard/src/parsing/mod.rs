//! Parsers for the dashboard's JSON snapshot feeds.
//!
//! Each feed arrives as a JSON array and decodes through a raw struct that
//! mirrors the upstream field names exactly, then converts to the domain
//! types in [`crate::core::domain`].
//!
//! # Parsers
//!
//! - [`queues`]: per-bucket queue metrics (`Dashboard-DesksQueues.json`)
//! - [`arrivals`]: per-flight arrivals rows (`Dashboard-ArrivalsInput.json`)
//! - [`passengers`]: manifest entries (`Dashboard-PassengerInput.json`)

pub mod arrivals;
pub mod passengers;
pub mod queues;
