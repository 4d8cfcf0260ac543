use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET};

use super::{load_bst, open_store, print_json};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { json } = cmd {
        let rows = open_store(cfg)?.read_all()?;
        let bst = load_bst(cfg)?;
        let summary = Core::summary(&rows, &bst);

        if *json {
            return print_json(&summary);
        }

        println!("{}• Total runs:{} {}{}{}", CYAN, RESET, GREEN, summary.total_runs, RESET);
        println!("{}• Unique Pokémon:{} {}", CYAN, RESET, summary.unique_pokemon);
        println!("{}• Average BST:{} {}", CYAN, RESET, summary.average_bst);
        println!("{}• Lowest BST:{} {}", CYAN, RESET, summary.lowest_bst);

        if let Some(last) = Core::last_run(&rows) {
            println!(
                "{}• Last run:{} {} at {} on {}",
                CYAN,
                RESET,
                last.pokemon,
                last.location,
                last.display_date()
            );
        }
    }

    Ok(())
}
