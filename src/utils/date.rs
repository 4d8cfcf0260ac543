//! Date utilities: parsing user input, reading/writing the run log date format.

use chrono::{Datelike, NaiveDate};

/// Date format accepted from users (CLI arguments, HTTP form fields).
pub const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Date format stored in the run log (`M/D/YYYY`, leading zeros tolerated on read).
pub const LOG_FORMAT: &str = "%m/%d/%Y";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Strict parse of a `YYYY-MM-DD` date coming from the user.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    // chrono accepts "2024-1-5"; new entries must use the padded form
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, INPUT_FORMAT).ok()
}

/// Parse a date as persisted in the run log.
pub fn parse_log_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), LOG_FORMAT).ok()
}

/// Render a date the way the run log stores it: `M/D/YYYY`, no leading zeros.
pub fn format_log_date(d: NaiveDate) -> String {
    format!("{}/{}/{}", d.month(), d.day(), d.year())
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}
