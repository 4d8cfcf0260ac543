//! HTTP route handlers for the leaderboard server.
//!
//! Every handler reads a fresh snapshot of the run log; nothing derived is
//! cached between requests.

use std::sync::{Arc, Mutex};

use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::bst::BstTable;
use crate::config::{Config, PublicConfig};
use crate::core::add::AddLogic;
use crate::core::calculator::summary::unique_pokemon;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::LogRow;
use crate::models::views::{
    BstEntry, CurrentStreak, LeaderboardEntry, LocationPercentage, LongestStreak,
    MaxRunsPerDay, PokemonDetail, RecentEntry,
};
use crate::store::RunStore;
use crate::utils::date;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<RunStore>>,
    pub bst: Arc<BstTable>,
    pub config: Arc<Config>,
    /// Fixed "today" for reproducible responses; `None` uses the local clock.
    pub today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(store: RunStore, bst: BstTable, config: Config) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            bst: Arc::new(bst),
            config: Arc::new(config),
            today: None,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(date::today)
    }

    /// Consistent copy of the whole log. Holding the lock keeps a concurrent
    /// append from being observed half-written.
    fn snapshot(&self) -> AppResult<Vec<LogRow>> {
        let store = self
            .store
            .lock()
            .map_err(|_| AppError::Server("run log lock poisoned".into()))?;
        store.read_all()
    }
}

#[derive(Debug, Deserialize)]
pub struct AddEntryForm {
    pub pokemon: String,
    pub location: String,
    pub date: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddEntryResponse {
    pub success: bool,
}

/// Handle POST /add_entry (form-encoded: pokemon, location, date, notes)
///
/// A missing or unreadable field is reported like any other validation error.
pub async fn handle_add_entry(
    State(state): State<AppState>,
    form: Result<Form<AddEntryForm>, FormRejection>,
) -> Result<Json<AddEntryResponse>, ApiError> {
    let Form(form) = form.map_err(|rejection| AppError::InvalidEntry(rejection.body_text()))?;

    let store = state
        .store
        .lock()
        .map_err(|_| AppError::Server("run log lock poisoned".into()))?;

    AddLogic::apply(
        &store,
        &form.pokemon,
        &form.location,
        &form.date,
        form.notes.as_deref(),
    )?;

    Ok(Json(AddEntryResponse { success: true }))
}

/// Handle GET /leaderboard
pub async fn handle_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let rows = state.snapshot()?;
    Ok(Json(Core::leaderboard(&rows, &state.bst, state.today())))
}

/// Handle GET /last10
pub async fn handle_recent(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecentEntry>>, ApiError> {
    let rows = state.snapshot()?;
    Ok(Json(Core::recent(&rows, state.config.recent_limit)))
}

/// Handle GET /location_percentages
pub async fn handle_location_percentages(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocationPercentage>>, ApiError> {
    let rows = state.snapshot()?;
    let shares = Core::location_breakdown(&rows, None)
        .into_iter()
        .map(LocationPercentage::from)
        .collect();
    Ok(Json(shares))
}

/// Handle GET /total_pokemon
pub async fn handle_total_pokemon(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let rows = state.snapshot()?;
    Ok(Json(serde_json::json!({ "total_pokemon": rows.len() })))
}

/// Handle GET /unique_pokemon
pub async fn handle_unique_pokemon(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let rows = state.snapshot()?;
    Ok(Json(serde_json::json!({ "unique_pokemon": unique_pokemon(&rows) })))
}

/// Handle GET /current_streak
pub async fn handle_current_streak(
    State(state): State<AppState>,
) -> Result<Json<CurrentStreak>, ApiError> {
    let rows = state.snapshot()?;
    Ok(Json(Core::current_streak(&rows, state.today())))
}

/// Handle GET /longest_streak
pub async fn handle_longest_streak(
    State(state): State<AppState>,
) -> Result<Json<LongestStreak>, ApiError> {
    let rows = state.snapshot()?;
    Ok(Json(Core::longest_streak(&rows)))
}

/// Handle GET /max_runs_per_day
pub async fn handle_max_runs_per_day(
    State(state): State<AppState>,
) -> Result<Json<MaxRunsPerDay>, ApiError> {
    let rows = state.snapshot()?;
    Ok(Json(Core::max_runs_per_day(&rows)))
}

/// Handle GET /average_bst
pub async fn handle_average_bst(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let rows = state.snapshot()?;
    let summary = Core::summary(&rows, &state.bst);
    Ok(Json(serde_json::json!({ "average_bst": summary.average_bst })))
}

/// Handle GET /lowest_bst
pub async fn handle_lowest_bst(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let rows = state.snapshot()?;
    let summary = Core::summary(&rows, &state.bst);
    Ok(Json(serde_json::json!({ "lowest_bst": summary.lowest_bst })))
}

/// Handle GET /last_pokemon
///
/// 404 when nothing has been logged yet.
pub async fn handle_last_pokemon(State(state): State<AppState>) -> Result<Response, ApiError> {
    let rows = state.snapshot()?;
    Ok(match Core::last_run(&rows) {
        Some(row) => Json(row.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

/// Handle GET /pokemon_entries/{name}
pub async fn handle_pokemon_entries(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PokemonDetail>, ApiError> {
    let rows = state.snapshot()?;
    Ok(Json(Core::pokemon_detail(&rows, &name)))
}

/// Handle GET /bst
pub async fn handle_bst(State(state): State<AppState>) -> Json<Vec<BstEntry>> {
    Json(state.bst.listing())
}

/// Handle GET /config
pub async fn handle_config(State(state): State<AppState>) -> Json<PublicConfig> {
    Json(state.config.public())
}
