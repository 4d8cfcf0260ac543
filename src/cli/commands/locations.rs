use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::percent;
use crate::utils::table::{Column, Table};
use crate::models::views::LocationShare;

use super::{open_store, print_json};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Locations { pokemon, json } = cmd {
        let rows = open_store(cfg)?.read_all()?;
        let shares = Core::location_breakdown(&rows, pokemon.as_deref());

        if *json {
            return print_json(&shares);
        }

        if shares.is_empty() {
            info("No runs match.");
            return Ok(());
        }

        match pokemon {
            Some(p) => header(format!("Locations for {p}")),
            None => header("Locations"),
        }
        print!("{}", render_shares(&shares));
    }

    Ok(())
}

pub(crate) fn render_shares(shares: &[LocationShare]) -> String {
    let mut table = Table::new(vec![
        Column::left("Location"),
        Column::right("Count"),
        Column::right("Share"),
    ]);

    for s in shares {
        table.add_row(vec![
            s.location.clone(),
            s.count.to_string(),
            percent(s.percentage),
        ]);
    }

    table.render()
}
