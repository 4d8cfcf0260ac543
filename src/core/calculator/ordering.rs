//! The single "most recent" ordering used by every view.

use crate::models::LogRow;
use std::cmp::Ordering;

/// `a` happened after `b`: later date, or same date and appended later.
/// A missing date compares below any real date.
pub fn after(a: &LogRow, b: &LogRow) -> bool {
    a.recency_key() > b.recency_key()
}

/// Comparator for "most recent first" sorting.
pub fn most_recent_first(a: &LogRow, b: &LogRow) -> Ordering {
    b.recency_key().cmp(&a.recency_key())
}

/// Rows sorted most recent first. Input order is irrelevant since
/// `(date, sequence)` is unique per row.
pub fn sorted_most_recent_first(rows: &[LogRow]) -> Vec<&LogRow> {
    let mut sorted: Vec<&LogRow> = rows.iter().collect();
    sorted.sort_by(|a, b| most_recent_first(a, b));
    sorted
}

pub fn most_recent(rows: &[LogRow]) -> Option<&LogRow> {
    rows.iter().max_by_key(|r| r.recency_key())
}

/// Number of rows strictly after `row`.
pub fn count_after(rows: &[LogRow], row: &LogRow) -> usize {
    rows.iter().filter(|r| after(r, row)).count()
}
