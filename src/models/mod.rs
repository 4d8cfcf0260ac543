pub mod run;
pub mod views;

pub use run::{LogRow, NewRun};
