//! The run log: a CSV file with one row per run, in the order runs were added.

pub mod csv_log;
pub mod migrate;

pub use csv_log::RunStore;

/// Column layout of the run log.
pub const HEADER: [&str; 4] = ["Pokemon", "Location", "Date", "Notes"];
