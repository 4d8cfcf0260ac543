use super::ordering::sorted_most_recent_first;
use super::time_since::time_since;
use crate::models::LogRow;
use crate::models::views::RecentEntry;

pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// The `limit` most recent runs, each annotated with the gap since the same
/// Pokémon's previous run anywhere in the log (not only inside the window).
///
/// `runs_since_last` counts every run after the previous occurrence up to and
/// including the current one.
pub fn build_recent(rows: &[LogRow], limit: usize) -> Vec<RecentEntry> {
    let sorted = sorted_most_recent_first(rows);

    sorted
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, current)| {
            let prior = sorted
                .iter()
                .enumerate()
                .skip(i + 1)
                .find(|(_, r)| r.pokemon == current.pokemon);

            let (time_since_last, runs_since_last) = match prior {
                Some((j, prev)) => (time_since(prev.date, current.date), Some(j - i)),
                None => (time_since(None, None), None),
            };

            RecentEntry {
                pokemon: current.pokemon.clone(),
                location: current.location.clone(),
                date: current.display_date(),
                notes: current.notes.clone(),
                sequence: current.sequence,
                time_since_last,
                runs_since_last,
            }
        })
        .collect()
}
