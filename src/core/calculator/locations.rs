use crate::models::LogRow;
use crate::models::views::LocationShare;
use std::collections::HashMap;

/// Share of runs per location, optionally for one Pokémon (case-insensitive).
pub fn location_breakdown(rows: &[LogRow], pokemon: Option<&str>) -> Vec<LocationShare> {
    match pokemon {
        Some(name) => {
            let name = name.to_lowercase();
            breakdown(rows.iter().filter(|r| r.pokemon.to_lowercase() == name))
        }
        None => breakdown(rows.iter()),
    }
}

/// Count by location, most frequent first; ties keep first-seen order.
pub(crate) fn breakdown<'a>(rows: impl Iterator<Item = &'a LogRow>) -> Vec<LocationShare> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;

    for row in rows {
        total += 1;
        match index.get(row.location.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(&row.location, counts.len());
                counts.push((&row.location, 1));
            }
        }
    }

    if total == 0 {
        return Vec::new();
    }

    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(location, count)| LocationShare {
            location: location.to_string(),
            count,
            percentage: 100.0 * count as f64 / total as f64,
        })
        .collect()
}
