use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::views::NEVER;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

use super::{open_store, print_json};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recent { limit, json } = cmd {
        let rows = open_store(cfg)?.read_all()?;
        let limit = limit.unwrap_or(cfg.recent_limit);
        let recent = Core::recent(&rows, limit);

        if *json {
            return print_json(&recent);
        }

        if recent.is_empty() {
            info("No runs logged yet.");
            return Ok(());
        }

        header(format!("Last {} runs", recent.len()));

        let mut table = Table::new(vec![
            Column::left("Pokemon"),
            Column::left("Location"),
            Column::left("Date"),
            Column::left("Time Since Last"),
            Column::right("Runs Since Last"),
            Column::left("Notes"),
        ]);

        for e in &recent {
            table.add_row(vec![
                e.pokemon.clone(),
                e.location.clone(),
                e.date.clone(),
                e.time_since_last.clone(),
                e.runs_since_last
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| NEVER.into()),
                e.notes.clone(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
