//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `37.5%` style, one decimal.
pub fn percent(p: f64) -> String {
    format!("{:.1}%", p)
}

/// Singular/plural label for a count: `1 run`, `3 runs`.
pub fn count_label(n: usize, singular: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {singular}s")
    }
}
