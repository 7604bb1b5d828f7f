//! Text and JSON rendition of the dashboard view.

use bike_core::Table;
use bike_data::filter::season_options;
use bike_data::{render, Filters, SeasonFilter, ViewModel};
use bike_utils::dates::{format_date, parse_date};
use bike_utils::numbers::format_optional;
use log::{info, warn};
use std::io::Write;

/// Raw selection as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct SummaryArgs {
    pub start: Option<String>,
    pub end: Option<String>,
    pub season: Option<String>,
    pub json: bool,
}

/// Load the dataset, render the view for the selection and print it.
pub fn run_summary(data_path: &str, args: &SummaryArgs) -> anyhow::Result<()> {
    let table = bike_core::loader::load_table(data_path)?;
    let filters = resolve_filters(&table, args)?;
    let view = render(&table, &filters);
    info!(
        "[Bike] summary: Rendered {} selected days from {} records",
        view.daily_usage.len(),
        table.records().len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &view)?;
        writeln!(out)?;
    } else {
        write_report(&view, &mut out)?;
    }
    Ok(())
}

/// Turn command line arguments into filters, defaulting to the whole table.
pub fn resolve_filters(table: &Table, args: &SummaryArgs) -> anyhow::Result<Filters> {
    let defaults = Filters::for_table(table);
    let start = match &args.start {
        Some(s) => parse_date(s)?,
        None => defaults.start,
    };
    let end = match &args.end {
        Some(s) => parse_date(s)?,
        None => defaults.end,
    };
    if start > end {
        warn!(
            "[Bike] summary: Start date {} is after end date {}; nothing will be selected",
            start, end
        );
    }

    let season = match &args.season {
        Some(label) => SeasonFilter::from_option(label),
        None => SeasonFilter::All,
    };
    if !season_options(table).iter().any(|o| o == season.as_option()) {
        warn!(
            "[Bike] summary: Season '{}' does not occur in the dataset; nothing will be selected",
            season.as_option()
        );
    }

    Ok(Filters::new(start, end, season))
}

/// Write the human readable report for `view`.
pub fn write_report<W: Write>(view: &ViewModel, out: &mut W) -> std::io::Result<()> {
    writeln!(
        out,
        "Bike sharing usage {} to {} (season: {})",
        format_date(&view.filters.start),
        format_date(&view.filters.end),
        view.filters.season.as_option()
    )?;
    writeln!(out)?;
    writeln!(out, "Total rides:         {}", view.metrics.total_usage)?;
    writeln!(
        out,
        "Average daily rides: {}",
        format_optional(view.metrics.average_usage)
    )?;
    writeln!(out)?;

    if view.is_selection_empty() {
        writeln!(out, "No rides in the selected range.")?;
    } else {
        writeln!(
            out,
            "Daily rides ({} of {} calendar days)",
            view.daily_usage.len(),
            view.filters.dates().count()
        )?;
        for day in &view.daily_usage {
            writeln!(out, "  {}  {:>8}", format_date(&day.date), day.count)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "Average rides by season (full dataset)")?;
    for season in &view.seasonal_usage {
        let marker = if season.highlighted { "  *" } else { "" };
        writeln!(out, "  {:<8} {:>10.2}{}", season.season, season.mean, marker)?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "Temperature vs rides (full dataset): correlation {} over {} days",
        format_optional(view.correlation),
        view.temperature_usage.len()
    )?;
    for group in &view.season_scatter {
        writeln!(out, "  {:<8} {:>5} days", group.season, group.points.len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bike_core::loader::parse_table;

    const CSV: &str = "\
dteday,season,cnt,temp
2011-01-01,1,10,0.2
2011-01-02,1,20,0.3
2011-06-01,2,30,0.7
2011-06-02,2,40,0.8
";

    fn args(start: Option<&str>, end: Option<&str>, season: Option<&str>) -> SummaryArgs {
        SummaryArgs {
            start: start.map(String::from),
            end: end.map(String::from),
            season: season.map(String::from),
            json: false,
        }
    }

    #[test]
    fn test_resolve_filters_defaults_to_whole_table() {
        let table = parse_table(CSV).unwrap();
        let filters = resolve_filters(&table, &SummaryArgs::default()).unwrap();
        assert_eq!(filters, Filters::for_table(&table));
    }

    #[test]
    fn test_resolve_filters_rejects_bad_dates() {
        let table = parse_table(CSV).unwrap();
        assert!(resolve_filters(&table, &args(Some("2011/01/01"), None, None)).is_err());
    }

    #[test]
    fn test_report_for_january() {
        let table = parse_table(CSV).unwrap();
        let filters =
            resolve_filters(&table, &args(Some("2011-01-01"), Some("2011-01-02"), None)).unwrap();
        let mut out = Vec::new();
        write_report(&render(&table, &filters), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Total rides:         30"));
        assert!(text.contains("Average daily rides: 15.00"));
        assert!(text.contains("Daily rides (2 of 2 calendar days)"));
        assert!(text.contains("Summer        35.00  *"));
    }

    #[test]
    fn test_report_for_empty_selection() {
        let table = parse_table(CSV).unwrap();
        let filters =
            resolve_filters(&table, &args(Some("2012-01-01"), Some("2012-12-31"), None)).unwrap();
        let mut out = Vec::new();
        write_report(&render(&table, &filters), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Total rides:         0"));
        assert!(text.contains("Average daily rides: n/a"));
        assert!(text.contains("No rides in the selected range."));
    }
}
