//! HTTP server implementation for the leaderboard.

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use tokio::signal;

use super::handlers::{
    AppState, handle_add_entry, handle_average_bst, handle_bst, handle_config,
    handle_current_streak, handle_last_pokemon, handle_leaderboard, handle_location_percentages,
    handle_longest_streak, handle_lowest_bst, handle_max_runs_per_day, handle_pokemon_entries,
    handle_recent, handle_total_pokemon, handle_unique_pokemon,
};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

/// Build the router with every endpoint bound to `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/add_entry", post(handle_add_entry))
        .route("/leaderboard", get(handle_leaderboard))
        .route("/last10", get(handle_recent))
        .route("/location_percentages", get(handle_location_percentages))
        .route("/total_pokemon", get(handle_total_pokemon))
        .route("/unique_pokemon", get(handle_unique_pokemon))
        .route("/current_streak", get(handle_current_streak))
        .route("/longest_streak", get(handle_longest_streak))
        .route("/max_runs_per_day", get(handle_max_runs_per_day))
        .route("/average_bst", get(handle_average_bst))
        .route("/lowest_bst", get(handle_lowest_bst))
        .route("/last_pokemon", get(handle_last_pokemon))
        .route("/pokemon_entries/{name}", get(handle_pokemon_entries))
        .route("/bst", get(handle_bst))
        .route("/config", get(handle_config))
        .with_state(state)
}

/// HTTP server for the leaderboard.
pub struct LeaderboardServer {
    state: AppState,
    port: u16,
}

impl LeaderboardServer {
    pub fn new(state: AppState, port: u16) -> Self {
        Self { state, port }
    }

    /// Run the HTTP server until Ctrl+C / SIGTERM.
    pub async fn run(self) -> AppResult<()> {
        let title = self.state.config.title.clone();
        let app = router(self.state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::Server(format!("cannot bind {addr}: {e}")))?;

        info(format!("{title} is running at:"));
        println!("  http://127.0.0.1:{} | only accessible from this machine", self.port);
        println!("  http://<this-host>:{} | accessible anywhere on your network", self.port);
        tracing::info!("Starting leaderboard HTTP server on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::Server(e.to_string()))?;

        tracing::info!("Server shut down gracefully");
        Ok(())
    }
}

/// Listen for SIGTERM and SIGINT (Ctrl+C).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
