//! View-model construction for the dashboard panels.
//!
//! Every function here is a pure mapping from (snapshot, bucket index,
//! config) to plain data; applying a view to the document is the
//! frontend's job and happens elsewhere.

pub mod arrivals;
pub mod passenger_mix;
pub mod queue_board;
pub mod window;

pub use arrivals::build_arrivals_table;
pub use passenger_mix::passenger_mix;
pub use queue_board::build_queue_board;
