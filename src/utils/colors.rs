/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out placeholder values ("Never", empty cells) so real data stands out.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "Never" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Streak color:
/// 0 → red
/// 1..=2 → yellow
/// 3+ → green
pub fn color_for_streak(days: usize) -> &'static str {
    match days {
        0 => RED,
        1 | 2 => YELLOW,
        _ => GREEN,
    }
}
