use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::server::{AppState, LeaderboardServer};
use chrono::NaiveDate;

use super::{load_bst, open_store};

/// Start the HTTP server on a fresh multi-threaded runtime.
pub fn handle(cmd: &Commands, cfg: &Config, today: Option<NaiveDate>) -> AppResult<()> {
    if let Commands::Serve { port } = cmd {
        let store = open_store(cfg)?;
        let bst = load_bst(cfg)?;
        let port = port.unwrap_or(cfg.port);

        let mut state = AppState::new(store, bst, cfg.clone());
        if let Some(d) = today {
            state = state.with_today(d);
        }

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| AppError::Server(format!("cannot start runtime: {e}")))?;
        runtime.block_on(LeaderboardServer::new(state, port).run())?;
    }

    Ok(())
}
