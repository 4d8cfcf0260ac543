//! HTTP layer: one JSON endpoint per view of the run log.

pub mod error;
pub mod handlers;
pub mod http;

pub use handlers::AppState;
pub use http::{LeaderboardServer, router};
