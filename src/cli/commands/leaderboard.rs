use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::views::NEVER;
use crate::ui::messages::{header, info};
use crate::utils::date::format_log_date;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

use super::{load_bst, open_store, print_json};

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Leaderboard { json } = cmd {
        let rows = open_store(cfg)?.read_all()?;
        let bst = load_bst(cfg)?;
        let board = Core::leaderboard(&rows, &bst, today);

        if *json {
            return print_json(&board);
        }

        if board.is_empty() {
            info("No runs logged yet.");
            return Ok(());
        }

        header(&cfg.title);

        let mut table = Table::new(vec![
            Column::right("#"),
            Column::left("Pokemon"),
            Column::right("Count"),
            Column::left("Last Time Ran"),
            Column::right("BST"),
            Column::left("Time Since"),
            Column::right("Runs Since"),
        ]);

        for (i, e) in board.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                e.pokemon.clone(),
                e.count.to_string(),
                e.last_date.map(format_log_date).unwrap_or_default(),
                e.bst.to_string(),
                e.time_since_last.clone(),
                e.runs_since_last
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| NEVER.into()),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
