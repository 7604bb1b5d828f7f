use crate::season::Season;
use chrono::NaiveDate;
use serde::Serialize;

/// One day of bike sharing usage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub date: NaiveDate,
    pub season_code: i64,
    /// Derived from `season_code`; empty for codes outside 1..=4.
    pub season_label: &'static str,
    /// Total rides that day.
    pub count: u64,
    /// Normalized temperature in [0, 1].
    pub temperature: f64,
}

impl Record {
    pub fn new(date: NaiveDate, season_code: i64, count: u64, temperature: f64) -> Record {
        Record {
            date,
            season_code,
            season_label: Season::label_for_code(season_code),
            count,
            temperature,
        }
    }
}
