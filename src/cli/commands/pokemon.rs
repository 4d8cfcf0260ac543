use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{bold, count_label};
use crate::utils::table::{Column, Table};

use super::locations::render_shares;
use super::{load_bst, open_store, print_json};

/// Drill down into one Pokémon's runs.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pokemon { name, json } = cmd {
        let rows = open_store(cfg)?.read_all()?;
        let detail = Core::pokemon_detail(&rows, name);

        if *json {
            return print_json(&detail);
        }

        if detail.total_entries == 0 {
            info(format!("No runs logged for {name}."));
            return Ok(());
        }

        let bst = load_bst(cfg)?;
        header(format!(
            "{} ({}, BST {})",
            bold(&detail.entries[0].pokemon),
            count_label(detail.total_entries, "run"),
            bst.bst_of(name)
        ));

        let mut table = Table::new(vec![
            Column::left("Date"),
            Column::left("Location"),
            Column::left("Notes"),
        ]);
        for e in &detail.entries {
            table.add_row(vec![e.display_date(), e.location.clone(), e.notes.clone()]);
        }
        print!("{}", table.render());

        println!();
        print!("{}", render_shares(&detail.location_percentages));
    }

    Ok(())
}
