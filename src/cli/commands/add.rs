use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::format_log_date;

use super::open_store;

/// Log a new run.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        pokemon,
        location,
        date,
        notes,
    } = cmd
    {
        let store = open_store(cfg)?;
        let run = AddLogic::apply(&store, pokemon, location, date, notes.as_deref())?;

        success(format!(
            "Logged {} at {} on {}",
            run.pokemon,
            run.location,
            format_log_date(run.date)
        ));
    }

    Ok(())
}
