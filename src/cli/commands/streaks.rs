use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, RESET, color_for_streak, colorize_optional};
use crate::utils::date::format_log_date;
use crate::utils::formatting::count_label;
use chrono::NaiveDate;

use super::{open_store, print_json};

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Streaks { json } = cmd {
        let rows = open_store(cfg)?.read_all()?;
        let report = Core::streaks(&rows, today);

        if *json {
            return print_json(&report);
        }

        let current = report.current.current_streak;
        println!(
            "{}• Current streak:{} {}{}{}",
            CYAN,
            RESET,
            color_for_streak(current),
            count_label(current, "day"),
            RESET
        );

        let longest = &report.longest;
        let span = match (longest.start_date, longest.end_date) {
            (Some(s), Some(e)) => format!("({} to {})", format_log_date(s), format_log_date(e)),
            _ => colorize_optional(""),
        };
        println!(
            "{}• Longest streak:{} {} {}",
            CYAN,
            RESET,
            count_label(longest.longest_streak, "day"),
            span
        );

        let busiest = &report.busiest;
        let days = if busiest.dates.is_empty() {
            colorize_optional("Never")
        } else {
            busiest.dates.join(", ")
        };
        println!(
            "{}• Most runs in a day:{} {} ({})",
            CYAN, RESET, busiest.max_runs, days
        );
    }

    Ok(())
}
