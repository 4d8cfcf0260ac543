use super::ordering::{after, count_after};
use super::time_since::time_since;
use crate::bst::BstTable;
use crate::models::LogRow;
use crate::models::views::LeaderboardEntry;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Per-Pokémon running totals, kept in first-seen order.
struct Tally<'a> {
    pokemon: &'a str,
    count: usize,
    last: &'a LogRow,
}

/// Rank every Pokémon in the log.
///
/// Order: most runs first; among equal counts the one seen least recently
/// comes first, so neglected mains float up. Remaining ties keep the order
/// in which each Pokémon first appeared in the log.
pub fn build_leaderboard(rows: &[LogRow], bst: &BstTable, today: NaiveDate) -> Vec<LeaderboardEntry> {
    let mut tallies: Vec<Tally> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        match index.get(row.pokemon.as_str()) {
            Some(&i) => {
                let tally = &mut tallies[i];
                tally.count += 1;
                if after(row, tally.last) {
                    tally.last = row;
                }
            }
            None => {
                index.insert(&row.pokemon, tallies.len());
                tallies.push(Tally {
                    pokemon: &row.pokemon,
                    count: 1,
                    last: row,
                });
            }
        }
    }

    let mut board: Vec<LeaderboardEntry> = tallies
        .into_iter()
        .map(|t| {
            // a Pokémon whose rows all carry malformed dates has no usable recency
            let runs_since_last = t.last.date.map(|_| count_after(rows, t.last));

            LeaderboardEntry {
                pokemon: t.pokemon.to_string(),
                count: t.count,
                last_date: t.last.date,
                last_sequence: t.last.sequence,
                bst: bst.bst_of(t.pokemon),
                time_since_last: time_since(t.last.date, Some(today)),
                runs_since_last,
            }
        })
        .collect();

    // day only: same count and same last day keep first-seen order, not sequence
    board.sort_by(|a, b| b.count.cmp(&a.count).then(a.last_date.cmp(&b.last_date)));
    board
}
