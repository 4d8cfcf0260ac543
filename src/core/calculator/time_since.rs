//! Calendar-aware "time since" rendering: `2 yrs, 4 mos, 8 days`.

use crate::models::views::NEVER;
use crate::utils::date::days_in_month;
use chrono::{Datelike, NaiveDate};

/// Whole years, months and days between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarGap {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl CalendarGap {
    /// Decompose the gap between two dates; argument order does not matter.
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };

        let mut years = to.year() - from.year();
        let mut months = to.month() as i32 - from.month() as i32;
        let mut days = to.day() as i32 - from.day() as i32;

        // Borrow whole months walking back from `to`; a single borrow can
        // leave days negative when `from` is late in a long month (Jan 31 → Mar 1).
        let (mut borrow_year, mut borrow_month) = (to.year(), to.month());
        while days < 0 {
            (borrow_year, borrow_month) = if borrow_month == 1 {
                (borrow_year - 1, 12)
            } else {
                (borrow_year, borrow_month - 1)
            };
            months -= 1;
            days += days_in_month(borrow_year, borrow_month) as i32;
        }

        while months < 0 {
            years -= 1;
            months += 12;
        }

        Self {
            years,
            months,
            days,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

fn unit(n: i32, singular: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {singular}s")
    }
}

/// Render the gap between two dates, `"Never"` if either side is unknown.
pub fn time_since(earlier: Option<NaiveDate>, later: Option<NaiveDate>) -> String {
    let (Some(a), Some(b)) = (earlier, later) else {
        return NEVER.to_string();
    };

    let gap = CalendarGap::between(a, b);
    if gap.is_zero() {
        return "0 days".to_string();
    }

    let mut parts = Vec::with_capacity(3);
    if gap.years > 0 {
        parts.push(unit(gap.years, "yr"));
    }
    if gap.months > 0 {
        parts.push(unit(gap.months, "mo"));
    }
    if gap.days > 0 {
        parts.push(unit(gap.days, "day"));
    }

    if parts.is_empty() {
        return "0 days".to_string();
    }
    parts.join(", ")
}
