//! The loaded dataset.
//!
//! A `Table` owns every record of the session in date order. It is never
//! mutated after construction; filtering produces new vectors of records.
//! Clones are cheap (shared `Rc`) so the table can sit in a Dioxus signal
//! and still be handed by value to the render path.

use crate::date_range::DateRange;
use crate::error::{LoadError, Result};
use crate::record::Record;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    records: Rc<[Record]>,
}

impl Table {
    /// Build a table from records in any order.
    ///
    /// Records are sorted by date. Fails with `LoadError::Empty` when there
    /// are no records and `LoadError::DuplicateDate` when two records share
    /// a date.
    pub fn from_records(mut records: Vec<Record>) -> Result<Table> {
        if records.is_empty() {
            return Err(LoadError::Empty);
        }
        records.sort_by_key(|r| r.date);
        if let Some(pair) = records.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(LoadError::DuplicateDate(pair[0].date));
        }
        Ok(Table {
            records: records.into(),
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Earliest through latest date in the dataset.
    pub fn date_bounds(&self) -> DateRange {
        // from_records guarantees at least one record
        let first = self.records[0].date;
        let last = self.records[self.records.len() - 1].date;
        DateRange(first, last)
    }

    /// Distinct season labels in order of first occurrence.
    pub fn season_labels(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = Vec::new();
        for record in self.records.iter() {
            if !labels.contains(&record.season_label) {
                labels.push(record.season_label);
            }
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_records_sorts_by_date() {
        let table = Table::from_records(vec![
            Record::new(ymd(2011, 6, 1), 2, 30, 0.7),
            Record::new(ymd(2011, 1, 1), 1, 10, 0.2),
        ])
        .unwrap();
        assert_eq!(table.records()[0].date, ymd(2011, 1, 1));
        assert_eq!(table.date_bounds(), DateRange(ymd(2011, 1, 1), ymd(2011, 6, 1)));
    }

    #[test]
    fn test_from_records_rejects_duplicate_dates() {
        let result = Table::from_records(vec![
            Record::new(ymd(2011, 1, 1), 1, 10, 0.2),
            Record::new(ymd(2011, 1, 1), 1, 12, 0.2),
        ]);
        assert!(matches!(result, Err(LoadError::DuplicateDate(d)) if d == ymd(2011, 1, 1)));
    }

    #[test]
    fn test_from_records_rejects_empty() {
        assert!(matches!(Table::from_records(Vec::new()), Err(LoadError::Empty)));
    }

    #[test]
    fn test_season_labels_in_first_occurrence_order() {
        let table = Table::from_records(vec![
            Record::new(ymd(2011, 1, 1), 4, 10, 0.2),
            Record::new(ymd(2011, 3, 21), 1, 10, 0.3),
            Record::new(ymd(2011, 6, 21), 2, 10, 0.6),
            Record::new(ymd(2011, 12, 21), 4, 10, 0.2),
        ])
        .unwrap();
        assert_eq!(table.season_labels(), vec!["Winter", "Spring", "Summer"]);
    }

    #[test]
    fn test_clone_shares_records() {
        let table = Table::from_records(vec![Record::new(ymd(2011, 1, 1), 1, 10, 0.2)]).unwrap();
        let cloned = table.clone();
        assert_eq!(table, cloned);
        assert!(std::ptr::eq(table.records(), cloned.records()));
    }
}
