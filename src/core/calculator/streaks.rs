//! Consecutive-day play streaks and busiest days.

use crate::models::LogRow;
use crate::models::views::{CurrentStreak, LongestStreak, MaxRunsPerDay};
use crate::utils::date::format_log_date;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

/// Distinct valid dates, ascending. Malformed dates never count toward a streak.
fn distinct_dates(rows: &[LogRow]) -> BTreeSet<NaiveDate> {
    rows.iter().filter_map(|r| r.date).collect()
}

fn consecutive(earlier: NaiveDate, later: NaiveDate) -> bool {
    (later - earlier).num_days() == 1
}

/// Streak ending at the newest logged day, provided that day is today or
/// yesterday; otherwise the streak is broken and reported as 0.
pub fn current_streak(rows: &[LogRow], today: NaiveDate) -> CurrentStreak {
    let dates = distinct_dates(rows);

    let Some(&newest) = dates.last() else {
        return CurrentStreak { current_streak: 0 };
    };

    if (today - newest).num_days() > 1 {
        return CurrentStreak { current_streak: 0 };
    }

    let mut streak = 1;
    let mut newer = newest;
    for &d in dates.iter().rev().skip(1) {
        if !consecutive(d, newer) {
            break;
        }
        streak += 1;
        newer = d;
    }

    CurrentStreak {
        current_streak: streak,
    }
}

/// Longest run of consecutive days ever logged. The earliest one wins ties.
pub fn longest_streak(rows: &[LogRow]) -> LongestStreak {
    let dates = distinct_dates(rows);
    let mut iter = dates.iter().copied();

    let Some(first) = iter.next() else {
        return LongestStreak::default();
    };

    let mut best = (1, first, first);
    let (mut len, mut start, mut prev) = (1, first, first);

    for d in iter {
        if consecutive(prev, d) {
            len += 1;
            if len > best.0 {
                best = (len, start, d);
            }
        } else {
            len = 1;
            start = d;
        }
        prev = d;
    }

    LongestStreak {
        longest_streak: best.0,
        start_date: Some(best.1),
        end_date: Some(best.2),
    }
}

/// Highest number of runs logged on a single day, with every day that hit it
/// (in the order those days first appear in the log).
pub fn max_runs_per_day(rows: &[LogRow]) -> MaxRunsPerDay {
    let mut per_day: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for d in rows.iter().filter_map(|r| r.date) {
        match index.get(&d) {
            Some(&i) => per_day[i].1 += 1,
            None => {
                index.insert(d, per_day.len());
                per_day.push((format_log_date(d), 1));
            }
        }
    }

    let max_runs = per_day.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let dates = per_day
        .into_iter()
        .filter(|(_, n)| *n == max_runs)
        .map(|(d, _)| d)
        .collect();

    MaxRunsPerDay { max_runs, dates }
}
