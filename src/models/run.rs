use crate::utils::date::{format_log_date, parse_log_date};
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the run log, as read back from the store.
///
/// `sequence` is the row's position in the file (0-based) and is the only
/// tie-breaker between rows logged on the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRow {
    #[serde(rename = "Pokemon")]
    pub pokemon: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Date")]
    pub date_raw: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(skip)]
    pub date: Option<NaiveDate>, // None ⇔ malformed date in the file
    #[serde(skip)]
    pub sequence: usize,
}

impl LogRow {
    pub fn new(
        sequence: usize,
        pokemon: impl Into<String>,
        location: impl Into<String>,
        date_raw: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        let date_raw = date_raw.into();
        Self {
            pokemon: pokemon.into(),
            location: location.into(),
            date: parse_log_date(&date_raw),
            date_raw,
            notes: notes.into(),
            sequence,
        }
    }

    /// Ordering key shared by every view: (date, sequence), missing dates lowest.
    pub fn recency_key(&self) -> (Option<NaiveDate>, usize) {
        (self.date, self.sequence)
    }

    /// Date as shown to users: normalized when valid, raw text otherwise.
    pub fn display_date(&self) -> String {
        match self.date {
            Some(d) => format_log_date(d),
            None => self.date_raw.clone(),
        }
    }
}

/// A validated run that is about to be appended to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRun {
    pub pokemon: String,
    pub location: String,
    pub date: NaiveDate,
    pub notes: String,
}

impl NewRun {
    pub fn to_record(&self) -> [String; 4] {
        [
            self.pokemon.clone(),
            self.location.clone(),
            format_log_date(self.date),
            self.notes.clone(),
        ]
    }
}
