//! Derived records produced by the aggregator. Never stored; rebuilt per query.
//!
//! Field names serialize the way the browser front end reads them.

use super::run::LogRow;
use crate::utils::date::format_log_date;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

pub const NEVER: &str = "Never";

fn runs_or_never<S: Serializer>(runs: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
    match runs {
        Some(n) => s.serialize_str(&n.to_string()),
        None => s.serialize_str(NEVER),
    }
}

fn log_date_opt<S: Serializer>(d: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
    match d {
        Some(d) => s.serialize_some(&format_log_date(*d)),
        None => s.serialize_none(),
    }
}

fn log_date_or_empty<S: Serializer>(d: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
    match d {
        Some(d) => s.serialize_str(&format_log_date(*d)),
        None => s.serialize_str(""),
    }
}

/// One leaderboard line per distinct Pokémon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "Pokemon")]
    pub pokemon: String,
    #[serde(rename = "Count")]
    pub count: usize,
    #[serde(rename = "Last Time Ran", serialize_with = "log_date_or_empty")]
    pub last_date: Option<NaiveDate>,
    #[serde(skip)]
    pub last_sequence: usize,
    #[serde(rename = "BST")]
    pub bst: u32,
    #[serde(rename = "Time Since Last Ran")]
    pub time_since_last: String,
    #[serde(rename = "Runs Since Last Ran", serialize_with = "runs_or_never")]
    pub runs_since_last: Option<usize>,
}

/// A recent run with the gap since the same Pokémon's previous run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentEntry {
    #[serde(rename = "Pokemon")]
    pub pokemon: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(skip)]
    pub sequence: usize,
    #[serde(rename = "Time Since Last Ran")]
    pub time_since_last: String,
    #[serde(rename = "Runs Since Last Ran", serialize_with = "runs_or_never")]
    pub runs_since_last: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrentStreak {
    pub current_streak: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LongestStreak {
    pub longest_streak: usize,
    #[serde(serialize_with = "log_date_opt")]
    pub start_date: Option<NaiveDate>,
    #[serde(serialize_with = "log_date_opt")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MaxRunsPerDay {
    pub max_runs: usize,
    pub dates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationShare {
    pub location: String,
    pub count: usize,
    pub percentage: f64,
}

/// Location share as the front end's location table reads it. The drill-down
/// keeps the lowercase `LocationShare` keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationPercentage {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Count")]
    pub count: usize,
    #[serde(rename = "Percentage")]
    pub percentage: f64,
}

impl From<LocationShare> for LocationPercentage {
    fn from(share: LocationShare) -> Self {
        Self {
            location: share.location,
            count: share.count,
            percentage: share.percentage,
        }
    }
}

/// Headline numbers shown above the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunSummary {
    pub total_runs: usize,
    pub unique_pokemon: usize,
    pub average_bst: u32,
    pub lowest_bst: u32,
}

/// Every run of a single Pokémon, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonDetail {
    pub entries: Vec<LogRow>,
    pub location_percentages: Vec<LocationShare>,
    pub total_entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BstEntry {
    #[serde(rename = "Pokemon")]
    pub pokemon: String,
    #[serde(rename = "BST")]
    pub bst: u32,
}

/// All streak figures at once, for the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakReport {
    #[serde(flatten)]
    pub current: CurrentStreak,
    #[serde(flatten)]
    pub longest: LongestStreak,
    #[serde(flatten)]
    pub busiest: MaxRunsPerDay,
}
