use crate::errors::{AppError, AppResult};
use crate::models::NewRun;
use crate::store::RunStore;
use crate::utils::date;

/// High-level business logic for adding a run.
pub struct AddLogic;

impl AddLogic {
    /// Validate raw user input into a run ready for the log.
    ///
    /// Text fields are trimmed; pokemon and location must not be empty and the
    /// date must be `YYYY-MM-DD`. Only new data is validated this strictly:
    /// rows already in the log are read leniently.
    pub fn validate(
        pokemon: &str,
        location: &str,
        date_str: &str,
        notes: Option<&str>,
    ) -> AppResult<NewRun> {
        let pokemon = pokemon.trim();
        if pokemon.is_empty() {
            return Err(AppError::InvalidEntry("pokemon must not be empty".into()));
        }

        let location = location.trim();
        if location.is_empty() {
            return Err(AppError::InvalidEntry("location must not be empty".into()));
        }

        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        Ok(NewRun {
            pokemon: pokemon.to_string(),
            location: location.to_string(),
            date: d,
            notes: notes.map(str::trim).unwrap_or_default().to_string(),
        })
    }

    /// Validate and append; the row is on disk when this returns Ok.
    pub fn apply(
        store: &RunStore,
        pokemon: &str,
        location: &str,
        date_str: &str,
        notes: Option<&str>,
    ) -> AppResult<NewRun> {
        let run = Self::validate(pokemon, location, date_str, notes)?;
        store.append(&run)?;

        tracing::info!(pokemon = %run.pokemon, location = %run.location, date = %run.date, "Run logged");
        Ok(run)
    }
}
