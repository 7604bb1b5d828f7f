//! Date range and season selection.

use bike_core::{DateRange, Record, Table};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Dropdown entry meaning "no season filter".
pub const ALL_SEASONS: &str = "All";

/// Season part of the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeasonFilter {
    All,
    Label(String),
}

impl SeasonFilter {
    /// Interpret a dropdown value; `"All"` disables the season filter.
    pub fn from_option(option: &str) -> SeasonFilter {
        if option == ALL_SEASONS {
            SeasonFilter::All
        } else {
            SeasonFilter::Label(option.to_string())
        }
    }

    /// The dropdown value this filter corresponds to.
    pub fn as_option(&self) -> &str {
        match self {
            SeasonFilter::All => ALL_SEASONS,
            SeasonFilter::Label(label) => label,
        }
    }

    pub fn matches(&self, season_label: &str) -> bool {
        match self {
            SeasonFilter::All => true,
            SeasonFilter::Label(label) => label == season_label,
        }
    }
}

impl Serialize for SeasonFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_option())
    }
}

/// The user's current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filters {
    /// Inclusive lower bound.
    pub start: NaiveDate,
    /// Inclusive upper bound. May precede `start`, which selects nothing.
    pub end: NaiveDate,
    pub season: SeasonFilter,
}

impl Filters {
    pub fn new(start: NaiveDate, end: NaiveDate, season: SeasonFilter) -> Filters {
        Filters { start, end, season }
    }

    /// Initial selection: the whole date span of the table and every season.
    pub fn for_table(table: &Table) -> Filters {
        let bounds = table.date_bounds();
        Filters::new(bounds.start(), bounds.end(), SeasonFilter::All)
    }

    pub fn dates(&self) -> DateRange {
        DateRange(self.start, self.end)
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.dates().contains(&record.date) && self.season.matches(record.season_label)
    }
}

/// Records matching both the date range and the season selection, in date
/// order. An inverted date range yields an empty vector.
pub fn filter_records(table: &Table, filters: &Filters) -> Vec<Record> {
    table
        .records()
        .iter()
        .filter(|r| filters.matches(r))
        .cloned()
        .collect()
}

/// Dropdown options: "All" followed by each season label present in the
/// table, in order of first occurrence.
pub fn season_options(table: &Table) -> Vec<String> {
    std::iter::once(ALL_SEASONS.to_string())
        .chain(table.season_labels().into_iter().map(String::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{four_day_table, ymd};

    #[test]
    fn test_date_range_is_inclusive() {
        let table = four_day_table();
        let filters = Filters::new(ymd(2011, 1, 2), ymd(2011, 6, 1), SeasonFilter::All);
        let dates: Vec<NaiveDate> = filter_records(&table, &filters)
            .iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(dates, vec![ymd(2011, 1, 2), ymd(2011, 6, 1)]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let table = four_day_table();
        let filters = Filters::new(ymd(2011, 6, 2), ymd(2011, 1, 1), SeasonFilter::All);
        assert!(filter_records(&table, &filters).is_empty());
    }

    #[test]
    fn test_season_and_dates_intersect() {
        let table = four_day_table();
        let filters = Filters::new(
            ymd(2011, 1, 2),
            ymd(2011, 6, 2),
            SeasonFilter::Label("Summer".to_string()),
        );
        let records = filter_records(&table, &filters);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.season_label == "Summer"));

        let filters = Filters::new(
            ymd(2011, 1, 1),
            ymd(2011, 1, 2),
            SeasonFilter::Label("Summer".to_string()),
        );
        assert!(filter_records(&table, &filters).is_empty());
    }

    #[test]
    fn test_empty_label_selects_unknown_season_codes() {
        let table = Table::from_records(vec![
            Record::new(ymd(2011, 1, 1), 1, 10, 0.2),
            Record::new(ymd(2011, 1, 2), 0, 20, 0.3),
            Record::new(ymd(2011, 1, 3), 9, 30, 0.4),
            Record::new(ymd(2011, 1, 4), 2, 40, 0.5),
        ])
        .unwrap();
        let (start, end) = (ymd(2011, 1, 1), ymd(2011, 1, 4));
        let filters = Filters::new(start, end, SeasonFilter::from_option(""));
        let counts: Vec<u64> = filter_records(&table, &filters)
            .iter()
            .map(|r| r.count)
            .collect();
        assert_eq!(counts, vec![20, 30]);
        assert_eq!(season_options(&table), vec!["All", "Spring", "", "Summer"]);
    }

    #[test]
    fn test_full_range_and_all_returns_whole_table() {
        let table = four_day_table();
        let records = filter_records(&table, &Filters::for_table(&table));
        assert_eq!(records.as_slice(), table.records());
    }

    #[test]
    fn test_filtering_leaves_table_untouched() {
        let table = four_day_table();
        let before = table.records().to_vec();
        let filters = Filters::new(ymd(2011, 1, 1), ymd(2011, 1, 1), SeasonFilter::All);
        let _ = filter_records(&table, &filters);
        assert_eq!(table.records(), before.as_slice());
    }

    #[test]
    fn test_season_options_start_with_all() {
        let table = four_day_table();
        assert_eq!(season_options(&table), vec!["All", "Spring", "Summer"]);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(SeasonFilter::from_option("All"), SeasonFilter::All);
        assert_eq!(
            SeasonFilter::from_option("Fall"),
            SeasonFilter::Label("Fall".to_string())
        );
        assert_eq!(SeasonFilter::from_option("Fall").as_option(), "Fall");
    }
}
