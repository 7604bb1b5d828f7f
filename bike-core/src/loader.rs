//! CSV loading for the daily usage dataset.
//!
//! # CSV Format
//!
//! Headers are required. Only four columns are read; any others (the
//! upstream file also carries `instant`, `yr`, `mnth`, `hum`, `casual`,
//! `registered`, ...) are ignored:
//!
//! ```text
//! dteday,season,cnt,temp
//! 2011-01-01,1,985,0.344167
//! ```

use crate::error::{LoadError, Result};
use crate::record::Record;
use crate::table::Table;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Dataset location, relative to the process working directory.
pub const DEFAULT_DATA_PATH: &str = "all_data.csv";

/// Date format of the `dteday` column: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Columns that must be present in the header.
pub const REQUIRED_COLUMNS: [&str; 4] = ["dteday", "season", "cnt", "temp"];

#[derive(Debug, Deserialize)]
struct RawRow {
    dteday: String,
    season: String,
    cnt: String,
    temp: String,
}

/// Load a table from a CSV file on disk.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    log::info!("[Bike] loader: Reading {}", path.display());
    let file = File::open(path)?;
    read_table(file)
}

/// Load a table from CSV text (e.g. data embedded with `include_str!`).
pub fn parse_table(csv_data: &str) -> Result<Table> {
    read_table(csv_data.as_bytes())
}

/// Load a table from any CSV reader.
pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for result in rdr.records() {
        let string_record = result.map_err(malformed_csv)?;
        records.push(to_record(&string_record, &headers)?);
    }
    let table = Table::from_records(records)?;
    log::info!("[Bike] loader: Loaded {} records", table.records().len());
    Ok(table)
}

fn to_record(string_record: &StringRecord, headers: &StringRecord) -> Result<Record> {
    let row = string_record
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or_default();
    let malformed = |message: String| LoadError::Malformed { row, message };

    let raw: RawRow = string_record
        .deserialize(Some(headers))
        .map_err(|e| malformed(e.to_string()))?;

    let date = parse_dteday(&raw.dteday)
        .ok_or_else(|| malformed(format!("invalid date '{}'", raw.dteday)))?;
    let season_code = raw
        .season
        .parse::<i64>()
        .map_err(|_| malformed(format!("invalid season code '{}'", raw.season)))?;
    let count = raw
        .cnt
        .parse::<u64>()
        .map_err(|_| malformed(format!("invalid ride count '{}'", raw.cnt)))?;
    let temperature = raw
        .temp
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite())
        .ok_or_else(|| malformed(format!("invalid temperature '{}'", raw.temp)))?;

    Ok(Record::new(date, season_code, count, temperature))
}

/// Structural CSV problems tied to a row (ragged rows, bad UTF-8) are
/// reported as `Malformed` at that row; anything else stays a CSV error.
fn malformed_csv(err: csv::Error) -> LoadError {
    match err.position() {
        Some(pos) => LoadError::Malformed {
            row: pos.line() as usize,
            message: err.to_string(),
        },
        None => LoadError::Csv(err),
    }
}

/// Parse a `dteday` value, discarding any time component after the date.
fn parse_dteday(value: &str) -> Option<NaiveDate> {
    let date_part = value.split([' ', 'T']).next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STR_RESULT: &str = "\
instant,dteday,season,yr,mnth,temp,cnt
1,2011-01-01,1,0,1,0.344167,985
2,2011-01-02,1,0,1,0.363478,801
3,2011-01-03,1,0,1,0.196364,1349
";

    #[test]
    fn test_parse_table_reads_required_columns() {
        let table = parse_table(STR_RESULT).unwrap();
        assert_eq!(table.records().len(), 3);
        let first = &table.records()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(first.season_code, 1);
        assert_eq!(first.season_label, "Spring");
        assert_eq!(first.count, 985);
        assert!((first.temperature - 0.344167).abs() < 1e-9);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let csv = "dteday,season,cnt\n2011-01-01,1,985\n";
        let err = parse_table(csv).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("temp")));
    }

    #[test]
    fn test_bad_date_is_malformed() {
        let csv = "dteday,season,cnt,temp\n01/01/2011,1,985,0.3\n";
        let err = parse_table(csv).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { row: 2, .. }), "{err}");
    }

    #[test]
    fn test_negative_count_is_malformed() {
        let csv = "dteday,season,cnt,temp\n2011-01-01,1,-4,0.3\n";
        assert!(matches!(
            parse_table(csv),
            Err(LoadError::Malformed { .. })
        ));
    }

    #[test]
    fn test_non_numeric_temperature_is_malformed() {
        let csv = "dteday,season,cnt,temp\n2011-01-01,1,4,warm\n";
        assert!(matches!(
            parse_table(csv),
            Err(LoadError::Malformed { .. })
        ));
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let csv = "dteday,season,cnt,temp\n2011-01-01,1,4,0.3\n2011-01-02,1,5\n";
        let err = parse_table(csv).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { row: 3, .. }), "{err}");
    }

    #[test]
    fn test_timestamp_suffix_is_ignored() {
        let csv = "dteday,season,cnt,temp\n2011-01-01 00:00:00,1,4,0.3\n";
        let table = parse_table(csv).unwrap();
        assert_eq!(
            table.records()[0].date,
            NaiveDate::from_ymd_opt(2011, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_unknown_season_code_loads_with_empty_label() {
        let csv = "dteday,season,cnt,temp\n2011-01-01,7,4,0.3\n";
        let table = parse_table(csv).unwrap();
        assert_eq!(table.records()[0].season_label, "");
    }

    #[test]
    fn test_header_only_is_empty() {
        let csv = "dteday,season,cnt,temp\n";
        assert!(matches!(parse_table(csv), Err(LoadError::Empty)));
    }

    #[test]
    fn test_fixture_dataset_loads() {
        let table = parse_table(include_str!("../../fixtures/all_data.csv")).unwrap();
        assert_eq!(table.records().len(), 731);
        assert_eq!(
            table.date_bounds().start(),
            NaiveDate::from_ymd_opt(2011, 1, 1).unwrap()
        );
        assert_eq!(
            table.season_labels(),
            vec!["Spring", "Summer", "Fall", "Winter"]
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_table("does/not/exist/all_data.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
