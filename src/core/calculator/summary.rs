use super::locations::breakdown;
use super::ordering::most_recent_first;
use crate::bst::BstTable;
use crate::models::LogRow;
use crate::models::views::{PokemonDetail, RunSummary};
use std::collections::HashSet;

pub fn unique_pokemon(rows: &[LogRow]) -> usize {
    rows.iter()
        .map(|r| r.pokemon.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Totals and BST figures across every run (one BST sample per run).
pub fn build_summary(rows: &[LogRow], bst: &BstTable) -> RunSummary {
    if rows.is_empty() {
        return RunSummary::default();
    }

    let per_run: Vec<u32> = rows.iter().map(|r| bst.bst_of(&r.pokemon)).collect();
    let total: u64 = per_run.iter().map(|&b| u64::from(b)).sum();

    RunSummary {
        total_runs: rows.len(),
        unique_pokemon: unique_pokemon(rows),
        average_bst: (total / rows.len() as u64) as u32,
        lowest_bst: per_run.iter().copied().min().unwrap_or(0),
    }
}

/// Every run of one Pokémon, matched case-insensitively.
pub fn pokemon_detail(rows: &[LogRow], name: &str) -> PokemonDetail {
    let name = name.to_lowercase();
    let mut entries: Vec<LogRow> = rows
        .iter()
        .filter(|r| r.pokemon.to_lowercase() == name)
        .cloned()
        .collect();

    // breakdown ties follow log order, so compute it before re-sorting
    let location_percentages = breakdown(entries.iter());
    entries.sort_by(most_recent_first);

    PokemonDetail {
        total_entries: entries.len(),
        entries,
        location_percentages,
    }
}
