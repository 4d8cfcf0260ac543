use crate::bst::BstTable;
use crate::core::calculator::{leaderboard, locations, ordering, recent, streaks, summary};
use crate::models::LogRow;
use crate::models::views::{
    CurrentStreak, LeaderboardEntry, LocationShare, LongestStreak, MaxRunsPerDay, PokemonDetail,
    RecentEntry, RunSummary, StreakReport,
};
use chrono::NaiveDate;

/// Entry point to every derived view of the run log.
///
/// Each call works on the snapshot it is given and keeps no state between
/// calls; `today` is always passed in so results are reproducible.
pub struct Core;

impl Core {
    pub fn leaderboard(rows: &[LogRow], bst: &BstTable, today: NaiveDate) -> Vec<LeaderboardEntry> {
        leaderboard::build_leaderboard(rows, bst, today)
    }

    pub fn recent(rows: &[LogRow], limit: usize) -> Vec<RecentEntry> {
        recent::build_recent(rows, limit)
    }

    pub fn current_streak(rows: &[LogRow], today: NaiveDate) -> CurrentStreak {
        streaks::current_streak(rows, today)
    }

    pub fn longest_streak(rows: &[LogRow]) -> LongestStreak {
        streaks::longest_streak(rows)
    }

    pub fn max_runs_per_day(rows: &[LogRow]) -> MaxRunsPerDay {
        streaks::max_runs_per_day(rows)
    }

    pub fn streaks(rows: &[LogRow], today: NaiveDate) -> StreakReport {
        StreakReport {
            current: streaks::current_streak(rows, today),
            longest: streaks::longest_streak(rows),
            busiest: streaks::max_runs_per_day(rows),
        }
    }

    pub fn location_breakdown(rows: &[LogRow], pokemon: Option<&str>) -> Vec<LocationShare> {
        locations::location_breakdown(rows, pokemon)
    }

    pub fn summary(rows: &[LogRow], bst: &BstTable) -> RunSummary {
        summary::build_summary(rows, bst)
    }

    pub fn pokemon_detail(rows: &[LogRow], name: &str) -> PokemonDetail {
        summary::pokemon_detail(rows, name)
    }

    pub fn last_run(rows: &[LogRow]) -> Option<&LogRow> {
        ordering::most_recent(rows)
    }
}
