use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::views::BstEntry;
use crate::ui::messages::warning;
use crate::utils::table::{Column, Table};

use super::{load_bst, print_json};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bst { name, json } = cmd {
        let table = load_bst(cfg)?;

        let entries: Vec<BstEntry> = match name {
            Some(n) => match table.lookup(n) {
                Some(bst) => vec![BstEntry {
                    pokemon: n.clone(),
                    bst,
                }],
                None => {
                    warning(format!("{n} is not in the BST table (counts as 0)"));
                    Vec::new()
                }
            },
            None => table.listing(),
        };

        if *json {
            return print_json(&entries);
        }

        let mut out = Table::new(vec![Column::left("Pokemon"), Column::right("BST")]);
        for e in &entries {
            out.add_row(vec![e.pokemon.clone(), e.bst.to_string()]);
        }
        if !out.is_empty() {
            print!("{}", out.render());
        }
    }

    Ok(())
}
